use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by cache backends and the proximity cache.
pub enum CacheError {
    /// Backend is not reachable.
    #[error("cache backend unavailable")]
    Unavailable,

    /// Backend accepted the call but failed it.
    #[error("cache backend error: {reason}")]
    Backend {
        /// Error message.
        reason: String,
    },

    /// Cached payload could not be encoded or decoded.
    #[error("cache payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
