use serde::Serialize;
use serde_json::Value;

use basketlens_core::{
    comparison_snapshot, compute_snapshot_in, BasketWindow, Kpi, Symbol, TickerSeries,
};
use basketlens_data::read_series_dir;

use crate::cli::IndexArgs;
use crate::error::CliError;

use super::{find_series, parse_holdings, parse_range, select_held};

#[derive(Debug, Serialize)]
struct HoldingView {
    ticker: String,
    shares: u64,
    percent: f64,
}

#[derive(Debug, Serialize)]
struct BenchmarkView {
    ticker: String,
    kpi: Kpi,
}

#[derive(Debug, Serialize)]
struct IndexResponse {
    range: String,
    holdings: Vec<HoldingView>,
    dates: Vec<String>,
    values: Vec<f64>,
    kpi: Kpi,
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkView>,
}

pub fn run(args: &IndexArgs) -> Result<Value, CliError> {
    let range = parse_range(&args.range)?;
    let holdings = parse_holdings(&args.holdings)?;
    let dataset = read_series_dir(&args.data_dir)?;

    let held: Vec<TickerSeries> = select_held(&dataset, &holdings)?
        .into_iter()
        .cloned()
        .collect();

    let window = BasketWindow::new(&held, range);
    let snapshot = compute_snapshot_in(&held, &holdings, &window).ok_or_else(|| {
        CliError::InsufficientData {
            reason: format!("basket has no computable index in range {range}"),
        }
    })?;

    let benchmark = match &args.benchmark {
        Some(raw) => {
            let symbol = Symbol::parse(raw)?;
            let series =
                find_series(&dataset, &symbol).ok_or_else(|| CliError::MissingSeries {
                    ticker: symbol.to_string(),
                })?;
            // The benchmark shares the basket's window so the
            // comparison is like-for-like; a benchmark absent from the
            // range is reported, not zeroed.
            let bench = comparison_snapshot(series, &window).ok_or_else(|| {
                CliError::InsufficientData {
                    reason: format!("benchmark '{symbol}' has no data in range {range}"),
                }
            })?;
            Some(BenchmarkView {
                ticker: symbol.to_string(),
                kpi: bench.kpi,
            })
        }
        None => None,
    };

    let holdings_view = holdings
        .entries()
        .iter()
        .map(|holding| HoldingView {
            ticker: holding.symbol.to_string(),
            shares: holding.shares,
            percent: holdings.percent(&holding.symbol).unwrap_or(0.0),
        })
        .collect();

    let response = IndexResponse {
        range: range.as_str().to_owned(),
        holdings: holdings_view,
        dates: snapshot.index.dates.iter().map(|d| d.to_string()).collect(),
        values: snapshot.index.values.clone(),
        kpi: snapshot.kpi,
        benchmark,
    };
    Ok(serde_json::to_value(response)?)
}
