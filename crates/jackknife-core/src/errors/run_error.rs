//! Top-level run errors.

use super::error_code::JackknifeErrorCode;
use super::{ConfigurationError, InputShapeError};

/// Errors that can occur during a scoring run.
/// Aggregates the concern-specific errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunError {
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(#[from] InputShapeError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}

impl JackknifeErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInputShape(e) => e.error_code(),
            Self::InvalidConfiguration(e) => e.error_code(),
        }
    }
}
