//! Error types for subnet calculations.

use thiserror::Error;

/// Errors raised while parsing, converting or deriving addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Malformed text or binary input.
    #[error("Format error: {0}")]
    Format(String),

    /// A numeric value outside its allowed range.
    #[error("Range error: {0}")]
    Range(String),
}

/// Result type for subnet calculations.
pub type SubnetResult<T> = Result<T, SubnetError>;

impl SubnetError {
    pub(crate) fn format(msg: &str) -> Self {
        SubnetError::Format(msg.to_string())
    }

    pub(crate) fn range(msg: &str) -> Self {
        SubnetError::Range(msg.to_string())
    }
}
