//! Crate error types.

use thiserror::Error;

/// Errors surfaced by the comparison pipeline.
///
/// There are no transient conditions: every error is final and no
/// partial results are produced alongside one.
#[derive(Debug, Error)]
pub enum Error {
    /// Input data or a numeric parameter outside its documented domain,
    /// e.g. a negative p-value, alpha outside (0, 1), a sample with
    /// fewer than two observations, or a matched-pairs length mismatch.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unrecognized configuration value. There is no defined fallback;
    /// the caller must supply a valid mode.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
