use serde::Serialize;
use serde_json::Value;

use basketlens_core::{comparison_snapshot, BasketWindow, Kpi};
use basketlens_data::read_series_file;

use crate::cli::KpiArgs;
use crate::error::CliError;

use super::parse_range;

#[derive(Debug, Serialize)]
struct KpiResponse {
    ticker: String,
    range: String,
    points: usize,
    kpi: Kpi,
}

pub fn run(args: &KpiArgs) -> Result<Value, CliError> {
    let range = parse_range(&args.range)?;
    let series = read_series_file(&args.file)?;

    let window = BasketWindow::new(std::slice::from_ref(&series), range);
    let snapshot =
        comparison_snapshot(&series, &window).ok_or_else(|| CliError::InsufficientData {
            reason: format!(
                "series '{}' has fewer than 2 usable points in range {}",
                series.symbol, range
            ),
        })?;

    let response = KpiResponse {
        ticker: series.symbol.to_string(),
        range: range.as_str().to_owned(),
        points: snapshot.index.len(),
        kpi: snapshot.kpi,
    };
    Ok(serde_json::to_value(response)?)
}
