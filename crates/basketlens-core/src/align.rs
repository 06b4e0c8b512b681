//! Forward-fill projection onto a shared calendar.
//!
//! A gap resolves to the most recent prior print, never to an average
//! or a future value. No interpolation.

use crate::{AlignedSeries, DateKey, TickerSeries};

/// What to emit for calendar dates before a series' first observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadFill {
    /// Seed the head with the series' first known value, so the
    /// earliest bar of a combined basket calendar is still plottable.
    BackFill,
    /// Leave the head as `NaN`: the ticker simply has no data in that
    /// part of the calendar (e.g. a peer candidate listed later).
    LeaveNan,
}

/// Project `series` onto `calendar`, carrying the last known close
/// forward through gaps. Exact-date matches update the carried value;
/// every calendar date emits exactly one value.
pub fn align(series: &TickerSeries, calendar: &[DateKey], head_fill: HeadFill) -> AlignedSeries {
    let mut last_known: Option<f64> = None;
    let mut values = Vec::with_capacity(calendar.len());

    for date in calendar {
        if let Some(close) = series.close_at(date) {
            last_known = Some(close);
        }
        values.push(last_known.unwrap_or(f64::NAN));
    }

    if head_fill == HeadFill::BackFill {
        if let Some(first) = series.closes.first().copied() {
            for value in values.iter_mut() {
                if value.is_nan() {
                    *value = first;
                } else {
                    break;
                }
            }
        }
    }

    AlignedSeries {
        symbol: series.symbol.clone(),
        dates: calendar.to_vec(),
        values,
    }
}
