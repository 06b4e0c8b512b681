//! The end-to-end recompute surface.
//!
//! Everything here is a pure function over in-memory inputs; the whole
//! pipeline is re-run from scratch on any change to the selection,
//! holdings, range, or benchmark. Recomputation is idempotent and
//! side-effect-free, so there is no incremental caching to invalidate.

use serde::Serialize;

use crate::{
    align, compute_kpi, portfolio_index, union_calendar, window_indices, AlignedSeries, DateKey,
    HeadFill, Holdings, Kpi, PortfolioIndex, RangeKey, TickerSeries,
};

/// The shared calendar and the active window over it, computed once
/// per recompute and reused for the portfolio, the benchmark, and
/// every peer candidate so all comparisons share one axis.
#[derive(Debug, Clone)]
pub struct BasketWindow {
    pub calendar: Vec<DateKey>,
    pub indices: Vec<usize>,
}

impl BasketWindow {
    pub fn new(series: &[TickerSeries], range: RangeKey) -> Self {
        let calendar = union_calendar(series);
        let indices = window_indices(&calendar, range);
        Self { calendar, indices }
    }
}

/// One recomputed view of the basket: the normalized index plus its
/// statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSnapshot {
    pub index: PortfolioIndex,
    pub kpi: Kpi,
}

/// Recompute the portfolio index and KPIs for the current selection.
///
/// `series` carries the per-ticker histories for the selected tickers;
/// head gaps are back-filled so the earliest bar of the combined
/// calendar stays plottable. `None` means "cannot compute" (no usable
/// weights or fewer than 2 windowed points) and must not be rendered
/// as a flat zero line.
pub fn compute_snapshot(
    series: &[TickerSeries],
    holdings: &Holdings,
    range: RangeKey,
) -> Option<PortfolioSnapshot> {
    let window = BasketWindow::new(series, range);
    compute_snapshot_in(series, holdings, &window)
}

/// As [`compute_snapshot`], over an already-resolved window.
pub fn compute_snapshot_in(
    series: &[TickerSeries],
    holdings: &Holdings,
    window: &BasketWindow,
) -> Option<PortfolioSnapshot> {
    let windowed: Vec<AlignedSeries> = series
        .iter()
        .map(|s| align(s, &window.calendar, HeadFill::BackFill).window(&window.indices))
        .collect();

    let index = portfolio_index(&windowed, &holdings.weights())?;
    let kpi = compute_kpi(&index.dates, &index.values);
    Some(PortfolioSnapshot { index, kpi })
}

/// Process a single comparison series (benchmark or peer candidate)
/// through the same window and normalization as the portfolio.
///
/// The series is aligned onto the basket calendar without head
/// back-fill: a ticker absent from the requested range stays `NaN`
/// and, if nothing finite remains, the result is `None`.
pub fn comparison_snapshot(
    series: &TickerSeries,
    window: &BasketWindow,
) -> Option<PortfolioSnapshot> {
    let windowed = align(series, &window.calendar, HeadFill::LeaveNan).window(&window.indices);
    let weights = vec![(series.symbol.clone(), 1.0)];

    let index = portfolio_index(std::slice::from_ref(&windowed), &weights)?;
    let kpi = compute_kpi(&index.dates, &index.values);
    Some(PortfolioSnapshot { index, kpi })
}
