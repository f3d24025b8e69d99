//! Shared constants for the JackKnife engine.

/// Default confidence level for the JackKnife critical value.
pub const DEFAULT_PERCENTILE: f64 = 0.95;

/// Default degrees-of-freedom adjustment.
pub const DEFAULT_DOF1: f64 = 3.0;

/// Default significance level for the Grubbs test.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default output shape: ordered list.
pub const DEFAULT_USE_LIST_OUTPUT: bool = true;

/// Default: input carries no explicit identities.
pub const DEFAULT_USE_ID_FIELD: bool = false;

/// Smallest active set the iterative tests can estimate variance on.
pub const MIN_ITERATIVE_SAMPLE: usize = 3;

/// Project settings file name, looked up in the project root.
pub const SETTINGS_FILE_NAME: &str = "jackknife.toml";
