use thiserror::Error;

/// Errors from loading series files and reference tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Series(#[from] basketlens_core::ValidationError),
}
