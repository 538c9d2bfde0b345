//! Error types for the plotstat crates
//!
//! Provides a unified error type shared by every member crate.
//!
//! Most operations in this workspace never fail: undersized or empty
//! samples degrade to well-defined zero/empty results instead of
//! returning errors, so chart code can always render something. The
//! variants here cover the two cases that genuinely cannot degrade —
//! statistics that are mathematically undefined (correlation of a
//! constant series) and misconfigured builders.

use thiserror::Error;

/// Core error type for plotstat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a builder or function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an undersized sample
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a degenerate (zero-variance) input
    pub fn degenerate(context: &str) -> Self {
        Self::Computation(format!("{context} is undefined for zero-variance input"))
    }
}
