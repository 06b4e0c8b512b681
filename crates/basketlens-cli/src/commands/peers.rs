use serde::Serialize;
use serde_json::Value;

use basketlens_core::{
    comparison_snapshot, compute_snapshot_in, portfolio_bucket, rank_peers, BasketWindow, Kpi,
    RiskBucket, Symbol, TickerSeries,
};
use basketlens_data::{read_series_dir, read_universe};

use crate::cli::PeersArgs;
use crate::error::CliError;

use super::{find_series, parse_holdings, parse_range, select_held};

#[derive(Debug, Serialize)]
struct PeerView {
    ticker: String,
    name: String,
    bucket: RiskBucket,
    kpi: Kpi,
}

#[derive(Debug, Serialize)]
struct PeersResponse {
    range: String,
    bucket: RiskBucket,
    portfolio_kpi: Kpi,
    peers: Vec<PeerView>,
}

pub fn run(args: &PeersArgs) -> Result<Value, CliError> {
    let range = parse_range(&args.range)?;
    let holdings = parse_holdings(&args.holdings)?;
    let dataset = read_series_dir(&args.data_dir)?;
    let universe = read_universe(&args.universe)?;

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

    let benchmark = args
        .benchmark
        .as_deref()
        .map(Symbol::parse)
        .transpose()?;

    // Each candidate is windowed and normalized exactly like the
    // portfolio; candidates with no price data drop out via None.
    let peers = rank_peers(
        &universe,
        &holdings,
        benchmark.as_ref(),
        snapshot.kpi,
        |symbol| {
            find_series(&dataset, symbol)
                .and_then(|series| comparison_snapshot(series, &window))
                .map(|comparison| comparison.kpi)
        },
    );

    let response = PeersResponse {
        range: range.as_str().to_owned(),
        bucket: portfolio_bucket(&holdings, &universe),
        portfolio_kpi: snapshot.kpi,
        peers: peers
            .into_iter()
            .map(|peer| PeerView {
                ticker: peer.symbol.to_string(),
                name: peer.name,
                bucket: peer.bucket,
                kpi: peer.kpi,
            })
            .collect(),
    };
    Ok(serde_json::to_value(response)?)
}
