//! # jackknife-core
//!
//! Foundation crate for the Iterative JackKnife outlier engine.
//! Defines the record data model, the error enums, layered settings and
//! tracing setup shared by the analysis engine and the CLI.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use errors::RunError;
pub use types::{Dataset, Identity, Record};
