//! Core types for scoring runs.

use std::fmt;

use jackknife_core::Identity;
use serde::Serialize;

use super::stats::SampleStats;

/// Engine mode that produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    JackKnife,
    Grubbs,
    NoOutlier,
}

impl EngineMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::JackKnife => "jackknife",
            Self::Grubbs => "grubbs",
            Self::NoOutlier => "no_outlier",
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Final score of one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub identity: Identity,
    pub value: f64,
    /// Z-score against the active set at removal or at convergence.
    pub z_score: f64,
    /// Whether the record was confirmed as an outlier and removed.
    pub is_outlier: bool,
}

/// One confirmed outlier removal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierStep {
    pub identity: Identity,
    /// Position of the record in the input.
    pub position: usize,
    pub value: f64,
    pub z_score: f64,
    /// Critical value the candidate exceeded.
    pub critical_value: f64,
    /// Active-set size when the candidate was tested.
    pub active_size: usize,
}

/// Result of a scoring run: one entry per input record, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub mode: EngineMode,
    pub records: Vec<ScoredRecord>,
    /// Removals in the order they were confirmed.
    pub steps: Vec<OutlierStep>,
    /// Statistics of the active set the remaining records were scored against.
    pub final_stats: SampleStats,
    /// True when the run ended on a zero-variance or undersized sample and the
    /// remaining records received a Z-score of 0.
    pub degenerate: bool,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record carrying `identity`.
    pub fn get(&self, identity: &Identity) -> Option<&ScoredRecord> {
        self.records.iter().find(|r| &r.identity == identity)
    }

    pub fn outliers(&self) -> impl Iterator<Item = &ScoredRecord> {
        self.records.iter().filter(|r| r.is_outlier)
    }

    pub fn outlier_count(&self) -> usize {
        self.steps.len()
    }

    pub fn z_scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.z_score).collect()
    }
}
