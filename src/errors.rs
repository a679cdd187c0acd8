//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Arithmetic degeneracies (poles, null divisions) are not errors; they flow
/// through evaluation as non-finite values. Errors are reserved for unusable
/// configuration and for output-sink failures.
#[derive(Debug, Error)]
pub enum LadderBodeError {
    /// Raised when sweep bounds or the point count are unusable.
    #[error("sweep error: {0}")]
    InvalidSweep(String),
    /// Raised when a component configuration is invalid.
    #[error("component error: {0}")]
    Component(String),
    /// Raised when the output sink cannot be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
