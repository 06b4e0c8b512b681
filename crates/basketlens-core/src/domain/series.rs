use serde::{Deserialize, Serialize};

use crate::{DateKey, Symbol, ValidationError};

/// Raw per-ticker price history: parallel `dates` / `closes` vectors.
///
/// Construction normalizes the input: observations are sorted by date
/// key and duplicate dates are collapsed (the last close for a
/// duplicated key wins), so downstream code can assume strictly
/// increasing dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSeries {
    pub symbol: Symbol,
    pub dates: Vec<DateKey>,
    pub closes: Vec<f64>,
}

impl TickerSeries {
    pub fn new(
        symbol: Symbol,
        dates: Vec<DateKey>,
        closes: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        if dates.len() != closes.len() {
            return Err(ValidationError::LengthMismatch {
                symbol: symbol.to_string(),
                dates: dates.len(),
                closes: closes.len(),
            });
        }

        let mut points: Vec<(DateKey, f64)> = dates.into_iter().zip(closes).collect();
        points.sort_by(|a, b| a.0.cmp(&b.0));

        let mut dates = Vec::with_capacity(points.len());
        let mut closes = Vec::with_capacity(points.len());
        for (date, close) in points {
            if dates.last() == Some(&date) {
                // Duplicate date key: later observation replaces earlier.
                *closes.last_mut().expect("parallel to dates") = close;
            } else {
                dates.push(date);
                closes.push(close);
            }
        }

        Ok(Self {
            symbol,
            dates,
            closes,
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Close for an exact date key, if observed.
    pub fn close_at(&self, date: &DateKey) -> Option<f64> {
        self.dates
            .binary_search(date)
            .ok()
            .map(|index| self.closes[index])
    }
}

/// A ticker's series projected onto a shared calendar, one value per
/// calendar date. Values may be `NaN` where the ticker has no
/// observation at or before that date; consumers must tolerate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    pub symbol: Symbol,
    pub dates: Vec<DateKey>,
    pub values: Vec<f64>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Restrict to the given calendar indices, in order.
    pub fn window(&self, indices: &[usize]) -> AlignedSeries {
        AlignedSeries {
            symbol: self.symbol.clone(),
            dates: indices.iter().map(|&i| self.dates[i].clone()).collect(),
            values: indices.iter().map(|&i| self.values[i]).collect(),
        }
    }
}
