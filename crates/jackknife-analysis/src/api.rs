//! Run configurations and functional entry points.
//!
//! Each configuration is validated once at construction and is immutable
//! afterwards, so one value can be shared across threads and reused for
//! any number of runs.

use jackknife_core::config::JackknifeSettings;
use jackknife_core::errors::ConfigurationError;
use jackknife_core::{Dataset, RunError};

use crate::normalize::{render, RunInput, RunOutput, ShapeOptions};
use crate::outliers::{grubbs, jackknife, no_outlier, GrubbsRule, JackKnifeRule, RunResult};

/// Iterative JackKnife configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JackKnife {
    rule: JackKnifeRule,
    shape: ShapeOptions,
}

impl JackKnife {
    pub fn new(percentile: f64, dof1: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            rule: JackKnifeRule::new(percentile, dof1)?,
            shape: ShapeOptions::default(),
        })
    }

    pub fn from_settings(settings: &JackknifeSettings) -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            settings.jackknife.effective_percentile(),
            settings.jackknife.effective_dof1(),
        )?
        .with_shape(ShapeOptions::from_settings(&settings.output)))
    }

    pub fn with_shape(mut self, shape: ShapeOptions) -> Self {
        self.shape = shape;
        self
    }

    pub fn percentile(&self) -> f64 {
        self.rule.percentile()
    }

    pub fn dof1(&self) -> f64 {
        self.rule.dof1()
    }

    pub fn shape(&self) -> ShapeOptions {
        self.shape
    }

    /// Score an already normalized dataset.
    pub fn score(&self, dataset: &Dataset) -> RunResult {
        jackknife::detect(dataset, &self.rule)
    }

    /// Normalize `data`, score it, and render it in the configured shape.
    pub fn run(&self, data: impl RunInput) -> Result<RunOutput, RunError> {
        let dataset = normalize(data, self.shape)?;
        Ok(render(&self.score(&dataset), self.shape))
    }
}

/// Iterated Grubbs configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grubbs {
    rule: GrubbsRule,
    shape: ShapeOptions,
}

impl Grubbs {
    pub fn new(alpha: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            rule: GrubbsRule::new(alpha)?,
            shape: ShapeOptions::default(),
        })
    }

    pub fn from_settings(settings: &JackknifeSettings) -> Result<Self, ConfigurationError> {
        Ok(Self::new(settings.grubbs.effective_alpha())?
            .with_shape(ShapeOptions::from_settings(&settings.output)))
    }

    pub fn with_shape(mut self, shape: ShapeOptions) -> Self {
        self.shape = shape;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.rule.alpha()
    }

    pub fn shape(&self) -> ShapeOptions {
        self.shape
    }

    pub fn score(&self, dataset: &Dataset) -> RunResult {
        grubbs::detect(dataset, &self.rule)
    }

    pub fn run(&self, data: impl RunInput) -> Result<RunOutput, RunError> {
        let dataset = normalize(data, self.shape)?;
        Ok(render(&self.score(&dataset), self.shape))
    }
}

/// Single-pass Z-score configuration. Only the shape is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoOutlier {
    shape: ShapeOptions,
}

impl NoOutlier {
    pub fn new(shape: ShapeOptions) -> Self {
        Self { shape }
    }

    pub fn from_settings(settings: &JackknifeSettings) -> Self {
        Self::new(ShapeOptions::from_settings(&settings.output))
    }

    pub fn shape(&self) -> ShapeOptions {
        self.shape
    }

    pub fn score(&self, dataset: &Dataset) -> RunResult {
        no_outlier::score(dataset)
    }

    pub fn run(&self, data: impl RunInput) -> Result<RunOutput, RunError> {
        let dataset = normalize(data, self.shape)?;
        Ok(render(&self.score(&dataset), self.shape))
    }
}

/// Run the iterative JackKnife test.
///
/// [`JackKnife::default`] holds the conventional arguments:
/// `percentile = 0.95`, `dof1 = 3.0`, list output, no id field.
pub fn run_jackknife(
    data: impl RunInput,
    percentile: f64,
    dof1: f64,
    use_list_output: bool,
    use_id_field: bool,
) -> Result<RunOutput, RunError> {
    JackKnife::new(percentile, dof1)?
        .with_shape(ShapeOptions::new(use_list_output, use_id_field))
        .run(data)
}

/// Z-scores of every value against the whole dataset.
pub fn run_no_outlier(
    data: impl RunInput,
    use_list_output: bool,
    use_id_field: bool,
) -> Result<RunOutput, RunError> {
    NoOutlier::new(ShapeOptions::new(use_list_output, use_id_field)).run(data)
}

/// Run the iterated Grubbs test at significance `alpha`.
pub fn run_grubbs(
    data: impl RunInput,
    alpha: f64,
    use_list_output: bool,
    use_id_field: bool,
) -> Result<RunOutput, RunError> {
    Grubbs::new(alpha)?
        .with_shape(ShapeOptions::new(use_list_output, use_id_field))
        .run(data)
}

fn normalize(data: impl RunInput, shape: ShapeOptions) -> Result<Dataset, RunError> {
    Ok(data.into_data_input(shape.use_id_field)?.into_dataset()?)
}
