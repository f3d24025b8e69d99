//! Top-level settings with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{GrubbsSection, JackKnifeSection, OutputSection};
use crate::constants::SETTINGS_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level settings aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`JACKKNIFE_*`)
/// 3. Project settings (`jackknife.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JackknifeSettings {
    pub jackknife: JackKnifeSection,
    pub grubbs: GrubbsSection,
    pub output: OutputSection,
}

/// CLI override arguments that can be applied to settings.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub percentile: Option<f64>,
    pub dof1: Option<f64>,
    pub alpha: Option<f64>,
    pub use_list_output: Option<bool>,
    pub use_id_field: Option<bool>,
}

impl JackknifeSettings {
    /// Load settings with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        // Layer 3: project settings
        let project_path = root.join(SETTINGS_FILE_NAME);
        if project_path.exists() {
            Self::merge_toml_file(&mut settings, &project_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut settings);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut settings, cli);
        }

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate the settings values.
    pub fn validate(settings: &JackknifeSettings) -> Result<(), ConfigError> {
        if let Some(p) = settings.jackknife.percentile {
            if !(p > 0.0 && p < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "jackknife.percentile".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(d) = settings.jackknife.dof1 {
            if !d.is_finite() || d < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "jackknife.dof1".to_string(),
                    message: "must be a finite value of 0.0 or greater".to_string(),
                });
            }
        }
        if let Some(a) = settings.grubbs.alpha {
            if !(a > 0.0 && a < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "grubbs.alpha".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing settings.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(settings: &mut JackknifeSettings, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_settings: JackknifeSettings =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(settings, &file_settings);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut JackknifeSettings, other: &JackknifeSettings) {
        if other.jackknife.percentile.is_some() {
            base.jackknife.percentile = other.jackknife.percentile;
        }
        if other.jackknife.dof1.is_some() {
            base.jackknife.dof1 = other.jackknife.dof1;
        }
        if other.grubbs.alpha.is_some() {
            base.grubbs.alpha = other.grubbs.alpha;
        }
        if other.output.use_list_output.is_some() {
            base.output.use_list_output = other.output.use_list_output;
        }
        if other.output.use_id_field.is_some() {
            base.output.use_id_field = other.output.use_id_field;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer stays in effect.
    fn apply_env_overrides(settings: &mut JackknifeSettings) {
        if let Some(v) = env_parse::<f64>("JACKKNIFE_PERCENTILE") {
            settings.jackknife.percentile = Some(v);
        }
        if let Some(v) = env_parse::<f64>("JACKKNIFE_DOF1") {
            settings.jackknife.dof1 = Some(v);
        }
        if let Some(v) = env_parse::<f64>("JACKKNIFE_ALPHA") {
            settings.grubbs.alpha = Some(v);
        }
        if let Some(v) = env_parse::<bool>("JACKKNIFE_USE_LIST_OUTPUT") {
            settings.output.use_list_output = Some(v);
        }
        if let Some(v) = env_parse::<bool>("JACKKNIFE_USE_ID_FIELD") {
            settings.output.use_id_field = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(settings: &mut JackknifeSettings, cli: &CliOverrides) {
        if let Some(v) = cli.percentile {
            settings.jackknife.percentile = Some(v);
        }
        if let Some(v) = cli.dof1 {
            settings.jackknife.dof1 = Some(v);
        }
        if let Some(v) = cli.alpha {
            settings.grubbs.alpha = Some(v);
        }
        if let Some(v) = cli.use_list_output {
            settings.output.use_list_output = Some(v);
        }
        if let Some(v) = cli.use_id_field {
            settings.output.use_id_field = Some(v);
        }
    }

    /// Serialize the settings back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_effective_when_empty() {
        let settings = JackknifeSettings::from_toml("").unwrap();
        assert_eq!(settings.jackknife.effective_percentile(), 0.95);
        assert_eq!(settings.jackknife.effective_dof1(), 3.0);
        assert_eq!(settings.grubbs.effective_alpha(), 0.05);
        assert!(settings.output.effective_use_list_output());
        assert!(!settings.output.effective_use_id_field());
    }

    #[test]
    fn test_merge_only_overrides_present_values() {
        let mut base =
            JackknifeSettings::from_toml("[jackknife]\npercentile = 0.9\ndof1 = 1.0").unwrap();
        let other = JackknifeSettings::from_toml("[jackknife]\ndof1 = 2.0").unwrap();
        JackknifeSettings::merge(&mut base, &other);
        assert_eq!(base.jackknife.percentile, Some(0.9));
        assert_eq!(base.jackknife.dof1, Some(2.0));
    }
}
