//! Iterative JackKnife test.
//!
//! Removes the most extreme record while its |z| exceeds a Grubbs-form bound
//! built from a two-sided t quantile at `percentile` with `n - dof1` degrees
//! of freedom, re-estimating mean and standard deviation after each removal.

use std::time::Instant;

use jackknife_core::constants::{DEFAULT_DOF1, DEFAULT_PERCENTILE};
use jackknife_core::errors::ConfigurationError;
use jackknife_core::Dataset;
use tracing::{info, warn};

use super::critical::jackknife_critical_value;
use super::iterative::{self, CriticalValue};
use super::types::{EngineMode, RunResult};

/// Validated JackKnife decision rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JackKnifeRule {
    percentile: f64,
    dof1: f64,
}

impl JackKnifeRule {
    pub fn new(percentile: f64, dof1: f64) -> Result<Self, ConfigurationError> {
        if !percentile.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "percentile" });
        }
        if !dof1.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "dof1" });
        }
        if percentile <= 0.0 || percentile >= 1.0 {
            return Err(ConfigurationError::PercentileOutOfRange { value: percentile });
        }
        if dof1 < 0.0 {
            return Err(ConfigurationError::NegativeDof { value: dof1 });
        }
        Ok(Self { percentile, dof1 })
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    pub fn dof1(&self) -> f64 {
        self.dof1
    }
}

impl Default for JackKnifeRule {
    fn default() -> Self {
        Self {
            percentile: DEFAULT_PERCENTILE,
            dof1: DEFAULT_DOF1,
        }
    }
}

impl CriticalValue for JackKnifeRule {
    fn mode(&self) -> EngineMode {
        EngineMode::JackKnife
    }

    fn critical_value(&self, n: usize) -> f64 {
        jackknife_critical_value(n, self.percentile, self.dof1)
    }
}

/// Score `dataset` with the iterative JackKnife test.
pub fn detect(dataset: &Dataset, rule: &JackKnifeRule) -> RunResult {
    let started = Instant::now();
    let result = iterative::run(dataset, rule);

    if result.degenerate && !dataset.is_empty() {
        warn!(
            dataset_size = dataset.len(),
            active_size = result.final_stats.count,
            "degenerate sample, remaining records scored 0"
        );
    }
    info!(
        mode = "jackknife",
        dataset_size = dataset.len(),
        outlier_count = result.outlier_count(),
        percentile = rule.percentile,
        dof1 = rule.dof1,
        run_time_us = started.elapsed().as_micros() as u64,
        "run complete"
    );
    result
}
