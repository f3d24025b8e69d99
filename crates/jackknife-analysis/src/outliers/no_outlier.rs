//! Single-pass Z-scores with no removal, as a baseline for the iterative modes.

use jackknife_core::Dataset;
use tracing::debug;

use super::stats;
use super::types::{EngineMode, RunResult, ScoredRecord};

/// Score every record against the statistics of the whole dataset.
///
/// All scores are 0 when the dataset has fewer than two records or no spread.
pub fn score(dataset: &Dataset) -> RunResult {
    let values: Vec<f64> = dataset.values().collect();
    let sample = stats::summarize(&values);
    let degenerate = sample.is_degenerate();

    debug!(
        mode = "no_outlier",
        dataset_size = dataset.len(),
        mean = sample.mean,
        std_dev = sample.std_dev(),
        "scored"
    );

    RunResult {
        mode: EngineMode::NoOutlier,
        records: dataset
            .records()
            .iter()
            .map(|r| ScoredRecord {
                identity: r.identity.clone(),
                value: r.value,
                z_score: sample.z_score(r.value),
                is_outlier: false,
            })
            .collect(),
        steps: Vec::new(),
        final_stats: sample,
        degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sample_scores() {
        let ds = Dataset::from_values(&[1.2, 2.3, 1.8, 1.6, 10.5, 1.9, 2.1]).unwrap();
        let result = score(&ds);
        assert!((result.records[4].z_score - 2.2548).abs() < 1e-3);
        assert!((result.records[0].z_score - -0.5626).abs() < 1e-3);
        assert_eq!(result.outlier_count(), 0);
    }

    #[test]
    fn test_degenerate_inputs_score_zero() {
        for values in [vec![], vec![3.0], vec![2.0, 2.0, 2.0, 2.0]] {
            let ds = Dataset::from_values(&values).unwrap();
            let result = score(&ds);
            assert_eq!(result.len(), values.len());
            assert!(result.z_scores().iter().all(|&z| z == 0.0));
        }
    }

    #[test]
    fn test_two_values_are_scored() {
        let ds = Dataset::from_values(&[1.0, 3.0]).unwrap();
        let z = score(&ds).z_scores();
        assert!((z[0] + z[1]).abs() < 1e-12);
        assert!((z[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
