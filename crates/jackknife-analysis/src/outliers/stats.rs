//! Sample statistics shared by every engine mode.
//!
//! Mean and M2 (sum of squared deviations) are accumulated with Welford's
//! update. Large slices are split into fixed-size chunks summarized in
//! parallel and merged in chunk order with Chan's formula, so the result
//! depends only on the input, never on thread scheduling.

use rayon::prelude::*;
use serde::Serialize;

/// Slices at least this long are summarized in parallel.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Partition size for the parallel pass.
const CHUNK_SIZE: usize = 4_096;

/// Running count, mean and M2 of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SampleStats {
    pub count: usize,
    pub mean: f64,
    pub m2: f64,
}

impl SampleStats {
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let d1 = x - self.mean;
        self.mean += d1 / self.count as f64;
        let d2 = x - self.mean;
        self.m2 += d1 * d2;
    }

    /// Combine two partial summaries (Chan et al.).
    pub fn merge(self, other: SampleStats) -> SampleStats {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let (na, nb, n) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.mean - self.mean;
        SampleStats {
            count,
            mean: self.mean + delta * nb / n,
            m2: self.m2 + other.m2 + delta * delta * na * nb / n,
        }
    }

    /// Bessel-corrected variance; 0 below two observations.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / (self.count - 1) as f64).max(0.0)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// `(x - mean) / std_dev`, or 0 when the sample has no spread.
    pub fn z_score(&self, x: f64) -> f64 {
        let sd = self.std_dev();
        if sd > 0.0 {
            (x - self.mean) / sd
        } else {
            0.0
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.std_dev() <= 0.0
    }
}

/// Summarize a slice, in parallel when it is large.
pub fn summarize(values: &[f64]) -> SampleStats {
    if values.len() < PARALLEL_THRESHOLD {
        return summarize_sequential(values);
    }
    let partials: Vec<SampleStats> = values
        .par_chunks(CHUNK_SIZE)
        .map(summarize_sequential)
        .collect();
    partials
        .into_iter()
        .fold(SampleStats::default(), SampleStats::merge)
}

fn summarize_sequential(values: &[f64]) -> SampleStats {
    let mut stats = SampleStats::default();
    for &v in values {
        stats.push(v);
    }
    stats
}
