//! Error handling for the JackKnife engine.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod configuration_error;
pub mod error_code;
pub mod input_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use configuration_error::ConfigurationError;
pub use error_code::JackknifeErrorCode;
pub use input_error::InputShapeError;
pub use run_error::RunError;
