//! JackknifeErrorCode trait for boundary conversion.

/// Trait for mapping errors to stable error code strings.
/// Every error enum implements this so callers outside Rust (CLI output,
/// JSON consumers) can branch on a code instead of a message.
pub trait JackknifeErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT_SHAPE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT_SHAPE: &str = "INVALID_INPUT_SHAPE";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
