//! Shared remove-one-and-re-estimate loop for the JackKnife and Grubbs modes.

use jackknife_core::constants::MIN_ITERATIVE_SAMPLE;
use jackknife_core::Dataset;
use tracing::debug;

use super::stats::{self, SampleStats};
use super::types::{EngineMode, OutlierStep, RunResult, ScoredRecord};

/// Decision rule of an iterative test: the bound a candidate's |z| must
/// exceed, for an active set of `n` records.
pub trait CriticalValue {
    fn mode(&self) -> EngineMode;

    fn critical_value(&self, n: usize) -> f64;
}

/// Run the iterative test over `dataset` with `rule`.
///
/// The active set starts as the whole dataset and loses exactly one record
/// per confirmed outlier, so the loop runs at most `n - 2` times.
pub fn run<R: CriticalValue + ?Sized>(dataset: &Dataset, rule: &R) -> RunResult {
    let records = dataset.records();
    let mut z_scores = vec![0.0; records.len()];
    let mut flagged = vec![false; records.len()];
    let mut active: Vec<usize> = (0..records.len()).collect();
    let mut values: Vec<f64> = Vec::with_capacity(records.len());
    let mut steps = Vec::new();

    let (final_stats, degenerate) = loop {
        values.clear();
        values.extend(active.iter().map(|&i| records[i].value));
        let sample = stats::summarize(&values);
        let n = active.len();

        if n < MIN_ITERATIVE_SAMPLE || sample.is_degenerate() {
            // Remaining records keep their z-score of 0.
            break (sample, true);
        }

        let (candidate, candidate_z) = max_abs_z(&values, &sample);
        let critical = rule.critical_value(n);

        if candidate_z.abs() > critical {
            let position = active.remove(candidate);
            z_scores[position] = candidate_z;
            flagged[position] = true;
            debug!(
                mode = %rule.mode(),
                active_size = n,
                position,
                candidate_z,
                critical_value = critical,
                "outlier removed"
            );
            steps.push(OutlierStep {
                identity: records[position].identity.clone(),
                position,
                value: records[position].value,
                z_score: candidate_z,
                critical_value: critical,
                active_size: n,
            });
        } else {
            for (&position, &value) in active.iter().zip(&values) {
                z_scores[position] = sample.z_score(value);
            }
            break (sample, false);
        }
    };

    RunResult {
        mode: rule.mode(),
        records: records
            .iter()
            .zip(z_scores)
            .zip(flagged)
            .map(|((r, z_score), is_outlier)| ScoredRecord {
                identity: r.identity.clone(),
                value: r.value,
                z_score,
                is_outlier,
            })
            .collect(),
        steps,
        final_stats,
        degenerate,
    }
}

/// Index (within `values`) and z-score of the largest |z|.
/// Ties go to the earliest index.
fn max_abs_z(values: &[f64], sample: &SampleStats) -> (usize, f64) {
    let mut best = (0, sample.z_score(values[0]));
    for (i, &v) in values.iter().enumerate().skip(1) {
        let z = sample.z_score(v);
        if z.abs() > best.1.abs() {
            best = (i, z);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects whenever |z| exceeds a fixed bound.
    struct Fixed(f64);

    impl CriticalValue for Fixed {
        fn mode(&self) -> EngineMode {
            EngineMode::JackKnife
        }

        fn critical_value(&self, _n: usize) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_ties_go_to_earliest_position() {
        let stats = stats::summarize(&[0.0, 10.0, 5.0, 0.0, 10.0]);
        assert_eq!(max_abs_z(&[0.0, 10.0, 5.0, 0.0, 10.0], &stats).0, 0);
    }

    #[test]
    fn test_zero_bound_strips_down_to_two() {
        let ds = Dataset::from_values(&[1.0, 2.0, 4.0, 8.0, 16.0, 32.0]).unwrap();
        let result = run(&ds, &Fixed(0.0));
        assert_eq!(result.steps.len(), ds.len() - 2);
        assert!(result.degenerate);
        for (k, step) in result.steps.iter().enumerate() {
            assert_eq!(step.active_size, ds.len() - k);
        }
        // The two survivors are scored 0.
        assert_eq!(result.records.iter().filter(|r| !r.is_outlier).count(), 2);
        assert!(result
            .records
            .iter()
            .filter(|r| !r.is_outlier)
            .all(|r| r.z_score == 0.0));
    }

    #[test]
    fn test_infinite_bound_is_single_pass() {
        let ds = Dataset::from_values(&[1.0, 2.0, 3.0, 100.0]).unwrap();
        let result = run(&ds, &Fixed(f64::MAX));
        assert!(result.steps.is_empty());
        assert!(!result.degenerate);
        let full = stats::summarize(&[1.0, 2.0, 3.0, 100.0]);
        assert_eq!(result.records[3].z_score, full.z_score(100.0));
    }
}
