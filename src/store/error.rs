use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by record store operations.
pub enum StoreError {
    /// Snapshot file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// File path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for the expected collection.
    #[error("failed to decode '{path}': {source}")]
    Decode {
        /// File path.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not serve the request.
    #[error("record store unavailable: {reason}")]
    Unavailable {
        /// Error message.
        reason: String,
    },
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
