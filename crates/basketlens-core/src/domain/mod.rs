//! # Domain Models
//!
//! Canonical domain types for the basketlens analytics core.
//!
//! All models are strongly typed and validated at construction:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, normalized equity ticker |
//! | [`DateKey`] | Calendar-ordered ISO date / date-time key |
//! | [`TickerSeries`] | Per-ticker price history (parallel dates/closes) |
//! | [`AlignedSeries`] | Series projected onto a shared calendar |
//!
//! Shape violations (mismatched vector lengths, malformed tickers)
//! surface as [`ValidationError`](crate::ValidationError); data-quality
//! gaps are represented in-band as `NaN` and handled downstream.

mod date;
mod series;
mod symbol;

pub use date::{format_day, DateKey};
pub use series::{AlignedSeries, TickerSeries};
pub use symbol::Symbol;
