//! Errors surfaced by the discovery operations.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
/// Errors returned by the finder, the search aggregator and the service.
///
/// Cache problems never appear here; they degrade to the store path.
pub enum DiscoveryError {
    /// The record store failed.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    /// The request cannot be served as given.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Error message.
        reason: String,
    },
}

/// Convenience result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
