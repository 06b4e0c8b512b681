//! Wire model of the per-ticker series file.

use serde::{Deserialize, Serialize};

use basketlens_core::{DateKey, Symbol, TickerSeries, ValidationError};

/// One per-ticker JSON file as produced by the static data pipeline:
/// `dates[i]` pairs with `close[i]`; dates are ISO dates for daily
/// data or ISO date-times for intraday data, in which case
/// `intervalMinutes` carries the bar size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesFile {
    pub ticker: Symbol,
    pub dates: Vec<String>,
    pub close: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_minutes: Option<u32>,
}

impl SeriesFile {
    /// Convert into the core series type, carrying the length
    /// validation and sort/dedup normalization.
    pub fn into_series(self) -> Result<TickerSeries, ValidationError> {
        TickerSeries::new(
            self.ticker,
            self.dates.into_iter().map(DateKey::from).collect(),
            self.close,
        )
    }
}

impl TryFrom<SeriesFile> for TickerSeries {
    type Error = ValidationError;

    fn try_from(value: SeriesFile) -> Result<Self, Self::Error> {
        value.into_series()
    }
}
