//! Error types for absorption modelling.
//!
//! The numeric kernels never return errors: out-of-range inputs propagate
//! as IEEE special values. Errors only arise when building a frequency
//! grid or when a caller asks for parameter validation before evaluating.

use thiserror::Error;

/// Result type for absorption modelling operations.
pub type Result<T> = std::result::Result<T, AbsorbError>;

/// Errors surfaced before a model is evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbsorbError {
    /// A physical or geometric parameter is outside its meaningful range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A frequency grid is empty, unordered or contains invalid entries.
    #[error("Invalid frequency grid: {0}")]
    InvalidGrid(String),
}

impl AbsorbError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }
}
