//! # Basketlens Core
//!
//! Portfolio analytics core for the basketlens dashboard: turns
//! heterogeneous, gap-filled per-ticker price series into a single
//! normalized basket index, computes performance/risk statistics from
//! it, keeps integer share counts and derived percentage weights
//! consistent, and selects comparison candidates by risk bucket.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Validated domain types (Symbol, DateKey, series) |
//! | [`calendar`] | Shared date-axis union |
//! | [`align`] | Forward-fill projection onto a calendar |
//! | [`window`] | Named lookback windows with fallbacks |
//! | [`holdings`] | Integer share ledger and weight derivation |
//! | [`index`] | Weighted, normalized portfolio index |
//! | [`kpi`] | Total return, CAGR, max drawdown |
//! | [`risk`] | Risk buckets and peer ranking |
//! | [`pipeline`] | End-to-end recompute surface |
//! | [`error`] | Core error types |
//!
//! ## Design
//!
//! The core is synchronous and side-effect-free: every entry point is
//! a pure function from (selection, holdings, range, reference data)
//! to (index, KPIs, peers), recomputed from scratch on any input
//! change. Data-quality failures (short windows, non-finite values,
//! tickers missing from the dataset) resolve to `None` or zero KPIs
//! with documented fallbacks; nothing in this crate is fatal. `Result`
//! is reserved for contract violations such as mismatched vector
//! lengths or malformed tickers.
//!
//! ## Quick Start
//!
//! ```rust
//! use basketlens_core::{
//!     compute_snapshot, Holdings, RangeKey, Symbol, TickerSeries,
//! };
//!
//! # fn main() -> Result<(), basketlens_core::ValidationError> {
//! let aapl = TickerSeries::new(
//!     Symbol::parse("AAPL")?,
//!     vec!["2024-01-02".into(), "2024-01-03".into()],
//!     vec![185.0, 187.5],
//! )?;
//!
//! let holdings = Holdings::equal_shares([Symbol::parse("AAPL")?]);
//! let snapshot = compute_snapshot(&[aapl], &holdings, RangeKey::All)
//!     .expect("two finite points are enough");
//!
//! assert_eq!(snapshot.index.values[0], 100.0);
//! # Ok(())
//! # }
//! ```

pub mod align;
pub mod calendar;
pub mod domain;
pub mod error;
pub mod holdings;
pub mod index;
pub mod kpi;
pub mod pipeline;
pub mod risk;
pub mod window;

// Re-export commonly used types at crate root for convenience

pub use align::{align, HeadFill};
pub use calendar::union_calendar;
pub use domain::{format_day, AlignedSeries, DateKey, Symbol, TickerSeries};
pub use error::{CoreError, ValidationError};
pub use holdings::{apportion, Holding, Holdings, DEFAULT_SHARES};
pub use index::{normalize_to_base, portfolio_index, PortfolioIndex, INDEX_BASE};
pub use kpi::{compute_kpi, Kpi};
pub use pipeline::{
    comparison_snapshot, compute_snapshot, compute_snapshot_in, BasketWindow, PortfolioSnapshot,
};
pub use risk::{portfolio_bucket, rank_peers, PeerCandidate, RiskBucket, UniverseRow};
pub use window::{window_indices, RangeKey};
