//! `[jackknife]` settings section.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOF1, DEFAULT_PERCENTILE};

/// Critical-value tuning for the iterative JackKnife test.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JackKnifeSection {
    /// Confidence level in (0, 1). Default: 0.95.
    pub percentile: Option<f64>,
    /// Degrees-of-freedom adjustment, >= 0. Default: 3.0.
    pub dof1: Option<f64>,
}

impl JackKnifeSection {
    /// Returns the effective percentile, defaulting to 0.95.
    pub fn effective_percentile(&self) -> f64 {
        self.percentile.unwrap_or(DEFAULT_PERCENTILE)
    }

    /// Returns the effective dof1, defaulting to 3.0.
    pub fn effective_dof1(&self) -> f64 {
        self.dof1.unwrap_or(DEFAULT_DOF1)
    }
}
