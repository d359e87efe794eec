//! Bake engine error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BakeError {
    /// Malformed or empty maturity table
    #[error("Invalid bake table: {0}")]
    InvalidTable(String),

    /// Query or configuration value the engine cannot answer
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for bake engine operations.
pub type BakeResult<T> = Result<T, BakeError>;
