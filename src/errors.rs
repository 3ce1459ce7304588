//! Error type shared by the matching and formatting layers
//!
//! The engine itself never fails on well-formed input: sequences of any size
//! and content (including empty ones) always produce a result. The only errors
//! are usage errors, surfaced to the caller immediately.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// An argument is outside the domain the operation accepts
    /// (e.g. `n == 0` or a cutoff outside `[0, 1]`, an unknown opcode tag).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A matcher was asked to honour a setting it does not support.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),
}

impl DiffError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DiffError::InvalidArgument(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        DiffError::UnsupportedConfiguration(message.into())
    }
}

pub type DiffResult<T> = Result<T, DiffError>;
