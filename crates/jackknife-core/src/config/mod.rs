//! Settings for JackKnife runs.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod grubbs_config;
pub mod jackknife_config;
pub mod output_config;
pub mod settings;

pub use grubbs_config::GrubbsSection;
pub use jackknife_config::JackKnifeSection;
pub use output_config::OutputSection;
pub use settings::{CliOverrides, JackknifeSettings};
