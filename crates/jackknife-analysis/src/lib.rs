//! # jackknife-analysis
//!
//! Record normalization and the three scoring engines:
//! iterative JackKnife, iterated Grubbs, and the single-pass NoOutlier
//! baseline. A run is a pure function of its data and configuration.

pub mod api;
pub mod normalize;
pub mod outliers;

pub use api::{run_grubbs, run_jackknife, run_no_outlier, Grubbs, JackKnife, NoOutlier};
pub use normalize::{DataInput, OutputRow, RunInput, RunOutput, ScoreMap, ScoredValue, ShapeOptions};
pub use outliers::{EngineMode, OutlierStep, RunResult, ScoredRecord};
