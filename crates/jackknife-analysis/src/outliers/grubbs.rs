//! Iterated two-sided Grubbs test.
//!
//! Same loop as the JackKnife test; the bound uses the classical
//! `t_{1 - alpha/(2n), n-2}` quantile.

use std::time::Instant;

use jackknife_core::constants::DEFAULT_ALPHA;
use jackknife_core::errors::ConfigurationError;
use jackknife_core::Dataset;
use tracing::info;

use super::critical::grubbs_critical_value;
use super::iterative::{self, CriticalValue};
use super::types::{EngineMode, RunResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrubbsRule {
    alpha: f64,
}

impl GrubbsRule {
    pub fn new(alpha: f64) -> Result<Self, ConfigurationError> {
        if !alpha.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "alpha" });
        }
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ConfigurationError::AlphaOutOfRange { value: alpha });
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for GrubbsRule {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl CriticalValue for GrubbsRule {
    fn mode(&self) -> EngineMode {
        EngineMode::Grubbs
    }

    fn critical_value(&self, n: usize) -> f64 {
        grubbs_critical_value(n, self.alpha)
    }
}

/// Score `dataset` with the iterated Grubbs test.
pub fn detect(dataset: &Dataset, rule: &GrubbsRule) -> RunResult {
    let started = Instant::now();
    let result = iterative::run(dataset, rule);
    info!(
        mode = "grubbs",
        dataset_size = dataset.len(),
        outlier_count = result.outlier_count(),
        alpha = rule.alpha,
        degenerate = result.degenerate,
        run_time_us = started.elapsed().as_micros() as u64,
        "run complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grubbs_clear_outlier() {
        let mut values: Vec<f64> = (0..20).map(|i| 10.0 + (i % 5) as f64 * 0.1).collect();
        values[0] = 100.0;
        let ds = Dataset::from_values(&values).unwrap();
        let result = detect(&ds, &GrubbsRule::new(0.05).unwrap());
        assert_eq!(result.outlier_count(), 1);
        assert_eq!(result.steps[0].position, 0);
        assert!(result.records[0].is_outlier);
    }

    #[test]
    fn test_grubbs_no_outlier() {
        let values: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let ds = Dataset::from_values(&values).unwrap();
        let result = detect(&ds, &GrubbsRule::new(0.05).unwrap());
        assert_eq!(result.outlier_count(), 0);
    }

    #[test]
    fn test_grubbs_identical_values() {
        let ds = Dataset::from_values(&[5.0; 15]).unwrap();
        let result = detect(&ds, &GrubbsRule::new(0.05).unwrap());
        assert!(result.degenerate);
        assert!(result.z_scores().iter().all(|&z| z == 0.0));
    }

    #[test]
    fn test_alpha_range() {
        assert!(matches!(
            GrubbsRule::new(0.0),
            Err(ConfigurationError::AlphaOutOfRange { .. })
        ));
        assert!(matches!(
            GrubbsRule::new(1.0),
            Err(ConfigurationError::AlphaOutOfRange { .. })
        ));
    }
}
