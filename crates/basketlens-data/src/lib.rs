//! # Basketlens Data
//!
//! The in-memory interface between the (out-of-scope) fetch layer and
//! the analytics core: serde models for the per-ticker series file and
//! the reference tables, an explicit series cache keyed by
//! `(market, frequency, ticker)`, the generation counter used to drop
//! stale fetch results, and filesystem loaders for the CLI.

pub mod cache;
pub mod error;
pub mod loader;
pub mod reference;
pub mod series;

pub use cache::{Frequency, Generation, SeriesCache, SeriesKey};
pub use error::DataError;
pub use loader::{read_benchmarks, read_series_dir, read_series_file, read_universe};
pub use reference::{BenchmarkRow, UniverseRow};
pub use series::SeriesFile;
