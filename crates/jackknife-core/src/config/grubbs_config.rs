//! `[grubbs]` settings section.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALPHA;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrubbsSection {
    /// Significance level in (0, 1). Default: 0.05.
    pub alpha: Option<f64>,
}

impl GrubbsSection {
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }
}
