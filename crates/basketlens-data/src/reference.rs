//! Static reference tables, read-only to the core.

use serde::{Deserialize, Serialize};

use basketlens_core::Symbol;

pub use basketlens_core::UniverseRow;

/// One row of the benchmark reference table: a ticker eligible as a
/// comparison benchmark, with its display label and market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRow {
    pub ticker: Symbol,
    pub label: String,
    pub market: String,
}
