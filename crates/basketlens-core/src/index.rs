//! Weighted portfolio index construction.
//!
//! Each constituent is rebased to 100 at its first finite value in the
//! window, weights are renormalized over the tickers actually present
//! in the data, and the basket value at each instant is the weighted
//! sum with `NaN` points contributing zero. Degenerate inputs yield
//! `None`, never a flat zero line.

use serde::Serialize;

use crate::{AlignedSeries, DateKey, Symbol};

pub const INDEX_BASE: f64 = 100.0;

/// The combined basket value over time, base 100 at the window start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioIndex {
    pub dates: Vec<DateKey>,
    pub values: Vec<f64>,
}

impl PortfolioIndex {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rescale a windowed series so its first finite value becomes
/// [`INDEX_BASE`]. With no finite value anywhere, the base falls back
/// to 1 so the division can never manufacture `Infinity`.
pub fn normalize_to_base(series: &AlignedSeries) -> AlignedSeries {
    let base = series
        .values
        .iter()
        .copied()
        .find(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(1.0);

    AlignedSeries {
        symbol: series.symbol.clone(),
        dates: series.dates.clone(),
        values: series
            .values
            .iter()
            .map(|v| v * INDEX_BASE / base)
            .collect(),
    }
}

/// Combine normalized constituents into one weighted index.
///
/// `weights` is the derived ticker→weight list from the holdings
/// ledger; tickers without a series in `aligned` are renormalized
/// away rather than zeroing the basket. Returns `None` when no
/// positive renormalized weight survives or fewer than 2 time points
/// exist.
pub fn portfolio_index(
    aligned: &[AlignedSeries],
    weights: &[(Symbol, f64)],
) -> Option<PortfolioIndex> {
    let present: Vec<(&AlignedSeries, f64)> = weights
        .iter()
        .filter_map(|(symbol, w)| {
            aligned
                .iter()
                .find(|series| &series.symbol == symbol)
                .map(|series| (series, *w))
        })
        .filter(|(series, w)| *w > 0.0 && series.values.iter().any(|v| v.is_finite()))
        .collect();

    let weight_sum: f64 = present.iter().map(|(_, w)| w).sum();
    if present.is_empty() || !weight_sum.is_finite() || weight_sum <= 0.0 {
        return None;
    }

    let dates = present[0].0.dates.clone();
    if dates.len() < 2 {
        return None;
    }

    let mut values = vec![0.0_f64; dates.len()];
    for (series, weight) in &present {
        let normalized = normalize_to_base(series);
        for (value, point) in values.iter_mut().zip(&normalized.values) {
            if point.is_finite() {
                *value += weight / weight_sum * point;
            }
        }
    }

    Some(PortfolioIndex { dates, values })
}
