use thiserror::Error;

/// Validation and contract errors exposed by `basketlens-core`.
///
/// These cover shape violations only. Data-quality problems (gaps,
/// non-finite values, too-short windows) never surface as errors; they
/// resolve to `None` or zero-valued KPIs at the call site.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("series '{symbol}' has {dates} dates but {closes} closes")]
    LengthMismatch {
        symbol: String,
        dates: usize,
        closes: usize,
    },

    #[error("invalid range key '{value}', expected one of 1D, 5D, 6M, YTD, 1Y, 5Y, ALL")]
    InvalidRangeKey { value: String },

    #[error("target percent {value} outside [0, 100]")]
    PercentOutOfRange { value: f64 },
    #[error("no holding for symbol '{symbol}'")]
    UnknownHolding { symbol: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
