use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] basketlens_core::ValidationError),

    #[error(transparent)]
    Data(#[from] basketlens_data::DataError),

    /// The pipeline declined to compute: too little data or degenerate
    /// weights. Distinct from zero so callers never mistake "cannot
    /// compute" for a flat result.
    #[error("not enough data: {reason}")]
    InsufficientData { reason: String },

    #[error("invalid holding '{value}', expected TICKER=SHARES")]
    InvalidHolding { value: String },

    #[error("no series file found for ticker '{ticker}'")]
    MissingSeries { ticker: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::InvalidHolding { .. } => 2,
            Self::Data(_) | Self::MissingSeries { .. } => 3,
            Self::InsufficientData { .. } => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
