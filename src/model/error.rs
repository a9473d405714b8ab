//! Record-level data quality errors.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while interpreting a record from the store.
pub enum ModelError {
    /// Opening or closing time is not a valid time of day.
    #[error("restaurant '{restaurant_id}' has an invalid time of day '{value}': {source}")]
    InvalidTime {
        /// Restaurant the value belongs to.
        restaurant_id: String,
        /// The raw stored value.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
