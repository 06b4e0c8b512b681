//! Shared date axis construction.
//!
//! Multiple tickers rarely trade on identical calendars (holidays,
//! listings, intraday gaps). Everything downstream works over the
//! union of all observed dates, so a basket chart has one x-axis.

use std::collections::BTreeSet;

use crate::{DateKey, TickerSeries};

/// Sorted, deduplicated union of every date key seen in any input
/// series. Empty input yields an empty calendar; per-series order does
/// not matter and the result is independent of series order.
pub fn union_calendar(series: &[TickerSeries]) -> Vec<DateKey> {
    let mut keys: BTreeSet<DateKey> = BTreeSet::new();
    for s in series {
        for date in &s.dates {
            keys.insert(date.clone());
        }
    }
    keys.into_iter().collect()
}
