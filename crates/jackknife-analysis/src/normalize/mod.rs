//! Record normalizer: caller input shapes in, caller output shapes out.
//! Performs no statistics.

pub mod input;
pub mod output;

pub use input::{DataInput, RunInput};
pub use output::{render, OutputRow, RunOutput, ScoreMap, ScoredValue, ShapeOptions};
