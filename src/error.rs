//! Error types for content normalization
//!
//! The normalizer itself never fails on malformed markup; rules that do not
//! match are no-ops. What remains are boundary failures: missing input, an
//! input above the size ceiling, and unexpected faults caught around the
//! blocking conversion task.

use thiserror::Error;

/// Result type alias for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Error types for normalization operations
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No content was supplied by the caller
    #[error("Missing required field: content")]
    MissingInput,

    /// Input exceeds the configured size ceiling
    #[error("HTML input too large: {size} bytes (maximum allowed: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// Unexpected fault while applying the rules
    #[error("Content transformation failed: {0}")]
    TransformFailure(String),
}

impl From<anyhow::Error> for NormalizeError {
    fn from(error: anyhow::Error) -> Self {
        NormalizeError::TransformFailure(error.to_string())
    }
}

impl NormalizeError {
    /// Whether the caller is at fault (bad or missing input)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NormalizeError::MissingInput | NormalizeError::InputTooLarge { .. }
        )
    }
}
