//! Crate-level error type.

use thiserror::Error;

use crate::backend::BackendError;
use crate::template::{ArgumentError, FormatError};

/// Everything a logging call can fail with.
///
/// A call either fully succeeds (the message reached the backend) or fails
/// with one of these; there is no partial output.
#[derive(Debug, Error)]
pub enum LogError {
    /// The template was malformed or had more placeholders than arguments.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A deferred argument's computation failed.
    #[error("argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// The sink rejected the finished message.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;
