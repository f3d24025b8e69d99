//! Input shape errors raised by the record normalizer.

use super::error_code::{self, JackknifeErrorCode};

/// Errors that can occur while resolving caller input into records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputShapeError {
    #[error("element {position} is not an [identity, value] pair")]
    NotAPair { position: usize },

    #[error("value at {position} is not numeric: {found}")]
    NonNumericValue { position: usize, found: String },

    #[error("value for key {key:?} is not numeric: {found}")]
    NonNumericMappingValue { key: String, found: String },

    #[error("value at {position} is not finite: {value}")]
    NonFiniteValue { position: usize, value: f64 },

    #[error("identity at {position} is not a scalar: {found}")]
    InvalidIdentity { position: usize, found: String },

    #[error("unsupported input container: expected a sequence or a mapping, found {found}")]
    UnsupportedContainer { found: String },
}

impl JackknifeErrorCode for InputShapeError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT_SHAPE
    }
}
