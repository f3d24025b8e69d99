//! Run configuration errors.

use super::error_code::{self, JackknifeErrorCode};

/// Errors raised when a run configuration is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("percentile must be strictly between 0 and 1, got {value}")]
    PercentileOutOfRange { value: f64 },

    #[error("alpha must be strictly between 0 and 1, got {value}")]
    AlphaOutOfRange { value: f64 },

    #[error("dof1 must be zero or greater, got {value}")]
    NegativeDof { value: f64 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

impl JackknifeErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CONFIGURATION
    }
}
