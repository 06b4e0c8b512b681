//! Performance statistics over an index series.

use serde::Serialize;

use crate::DateKey;

const DAYS_PER_YEAR: f64 = 365.25;

/// Headline statistics for one index series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpi {
    pub total_return: f64,
    pub cagr: f64,
    /// Always ≤ 0; 0 only if the series never dips below its running peak.
    pub max_drawdown: f64,
}

impl Kpi {
    /// The insufficient-data value. Callers must render it as "not
    /// enough data", not as a genuinely flat outcome.
    pub const ZERO: Kpi = Kpi {
        total_return: 0.0,
        cagr: 0.0,
        max_drawdown: 0.0,
    };
}

/// Compute KPIs for a series of index values with parallel dates.
/// Fewer than 2 points yields [`Kpi::ZERO`].
pub fn compute_kpi(dates: &[DateKey], values: &[f64]) -> Kpi {
    if values.len() < 2 {
        return Kpi::ZERO;
    }

    let first = values[0];
    let last = values[values.len() - 1];
    let total_return = if first > 0.0 { last / first - 1.0 } else { 0.0 };

    let years = elapsed_years(dates, values.len());
    let cagr = (1.0 + total_return).powf(1.0 / years) - 1.0;

    Kpi {
        total_return,
        cagr,
        max_drawdown: max_drawdown(values),
    }
}

/// Elapsed time in years between the first and last date, floored at
/// one day so same-day windows cannot blow up the CAGR exponent.
/// Unparseable dates fall back to counting one day per point.
fn elapsed_years(dates: &[DateKey], len: usize) -> f64 {
    let days = match (
        dates.first().and_then(|d| d.parse_date()),
        dates.last().and_then(|d| d.parse_date()),
    ) {
        (Some(first), Some(last)) => (last - first).whole_days() as f64,
        _ => (len - 1) as f64,
    };

    (days / DAYS_PER_YEAR).max(1.0 / DAYS_PER_YEAR)
}

/// Largest peak-to-trough decline, as a fraction ≤ 0.
fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;

    for &value in values {
        if !value.is_finite() {
            continue;
        }
        if value > peak {
            peak = value;
        }
        let dd = if peak > 0.0 { value / peak - 1.0 } else { 0.0 };
        if dd < worst {
            worst = dd;
        }
    }

    worst
}
