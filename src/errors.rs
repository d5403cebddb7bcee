//! # Sort Errors
//!
//! Error types for the sort entry points.
//!
//! Only the subject can be invalid. Malformed criteria and unresolvable
//! paths degrade silently and never surface here.

use thiserror::Error;

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Sort errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Subject is present but is not an array
    #[error("array-sort expects an array.")]
    InvalidArgument,
}

impl SortError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SortError::InvalidArgument => "ARRAY_SORT_INVALID_ARGUMENT",
        }
    }
}
