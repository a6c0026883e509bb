//! Error model for value arrays.

use thiserror::Error;

/// Result type used across the crate.
pub type ValueArrayResult<T> = Result<T, ValueArrayError>;

/// Failures surfaced by [`crate::ValueArray`].
///
/// Only construction and checked indexing can fail. Equality, hashing and
/// iteration are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueArrayError {
    /// A required argument was absent (e.g. no source sequence).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index fell outside `[0, length)`.
    #[error("index out of range: {index} (length: {length})")]
    IndexOutOfRange { index: isize, length: usize },
}

impl ValueArrayError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn index_out_of_range(index: isize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Whether this error was raised by an indexing operation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
