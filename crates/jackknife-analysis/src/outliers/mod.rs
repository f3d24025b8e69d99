//! Outlier scoring engines.
//!
//! - JackKnife: iterative removal against a t-based bound tuned by `percentile` and `dof1`
//! - Grubbs: iterative removal against the classical Grubbs bound at `alpha`
//! - NoOutlier: single-pass Z-scores over the whole dataset

pub mod critical;
pub mod grubbs;
pub mod iterative;
pub mod jackknife;
pub mod no_outlier;
pub mod stats;
pub mod types;

pub use grubbs::GrubbsRule;
pub use iterative::CriticalValue;
pub use jackknife::JackKnifeRule;
pub use stats::SampleStats;
pub use types::{EngineMode, OutlierStep, RunResult, ScoredRecord};
