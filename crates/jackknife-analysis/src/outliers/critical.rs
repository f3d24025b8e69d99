//! Critical values for the iterative tests.
//!
//! Student-t quantiles via `statrs`, converted to a bound on the maximum
//! absolute Z-score with the Grubbs form
//! G = ((n-1) / sqrt(n)) * sqrt(t² / (n - 2 + t²)).

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// At or above this many degrees of freedom the t quantile comes from its
/// Cornish-Fisher expansion around the normal quantile.
pub const LARGE_DOF: f64 = 100.0;

/// Student-t quantile at `confidence` with `df` degrees of freedom.
///
/// Returns `f64::MAX` when the distribution cannot be built or the quantile
/// is not finite, which makes the caller never reject.
pub fn t_critical(confidence: f64, df: f64) -> f64 {
    let t = if df >= LARGE_DOF {
        match Normal::new(0.0, 1.0) {
            Ok(normal) => cornish_fisher(normal.inverse_cdf(confidence), df),
            Err(_) => return f64::MAX,
        }
    } else {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(confidence),
            Err(_) => return f64::MAX,
        }
    };
    if t.is_finite() {
        t
    } else {
        f64::MAX
    }
}

/// t quantile from the normal quantile `z`, first three Cornish-Fisher terms.
fn cornish_fisher(z: f64, df: f64) -> f64 {
    let z2 = z * z;
    let g1 = (z2 + 1.0) * z / 4.0;
    let g2 = ((5.0 * z2 + 16.0) * z2 + 3.0) * z / 96.0;
    let g3 = (((3.0 * z2 + 19.0) * z2 + 17.0) * z2 - 15.0) * z / 384.0;
    z + g1 / df + g2 / (df * df) + g3 / (df * df * df)
}

/// Grubbs bound on |z| for a sample of size `n` given quantile `t`.
pub fn grubbs_bound(n: usize, t: f64) -> f64 {
    let n_f = n as f64;
    if n < 3 || t == f64::MAX {
        return f64::MAX;
    }
    let t2 = t * t;
    let g = ((n_f - 1.0) / n_f.sqrt()) * (t2 / (n_f - 2.0 + t2)).sqrt();
    if g.is_finite() {
        g
    } else {
        f64::MAX
    }
}

/// Effective degrees of freedom for the JackKnife lookup: `n - dof1`,
/// clamped to at least 1.
pub fn jackknife_dof(n: usize, dof1: f64) -> f64 {
    (n as f64 - dof1).max(1.0)
}

/// JackKnife critical value: two-sided t quantile at `percentile`
/// with `n - dof1` degrees of freedom.
pub fn jackknife_critical_value(n: usize, percentile: f64, dof1: f64) -> f64 {
    let confidence = 1.0 - (1.0 - percentile) / 2.0;
    let t = t_critical(confidence, jackknife_dof(n, dof1));
    grubbs_bound(n, t)
}

/// Classical Grubbs critical value: t quantile at `1 - alpha / (2n)`
/// with `n - 2` degrees of freedom.
pub fn grubbs_critical_value(n: usize, alpha: f64) -> f64 {
    if n < 3 {
        return f64::MAX;
    }
    let n_f = n as f64;
    let t = t_critical(1.0 - alpha / (2.0 * n_f), n_f - 2.0);
    grubbs_bound(n, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_quantiles_match_tables() {
        // Two-sided 95% quantiles from standard t tables.
        assert!((t_critical(0.975, 4.0) - 2.776).abs() < 1e-3);
        assert!((t_critical(0.975, 10.0) - 2.228).abs() < 1e-3);
        assert!((t_critical(0.95, 3.0) - 2.353).abs() < 1e-3);
    }

    #[test]
    fn test_t_critical_decreases_with_dof() {
        let mut prev = f64::MAX;
        for df in [
            1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 99.0, 100.0, 250.0, 1e3, 1e4,
            5e5, 1e6, 1.5e6, 3e6, 1e7,
        ] {
            let t = t_critical(0.975, df);
            assert!(t < prev, "t({df}) = {t} not below {prev}");
            prev = t;
        }
        // Approaches the normal quantile from above.
        assert!(prev > 1.959_963 && prev - 1.959_964 < 1e-5, "t(1e7) = {prev}");
    }

    #[test]
    fn test_large_dof_expansion_joins_exact_quantile() {
        let below = t_critical(0.975, LARGE_DOF - 1.0);
        let at = t_critical(0.975, LARGE_DOF);
        // t(0.975, 99) = 1.984217, t(0.975, 100) = 1.983972.
        assert!(below > at, "{below} <= {at}");
        assert!((below - 1.984_217).abs() < 5e-5, "t(99) = {below}");
        assert!((at - 1.983_972).abs() < 1e-5, "t(100) = {at}");
        assert!((t_critical(0.975, 1_000.0) - 1.962_339).abs() < 1e-5);
    }

    #[test]
    fn test_large_sample_bound_stays_near_normal_limit() {
        let g = jackknife_critical_value(10_000_000, 0.95, 3.0);
        assert!((g - 1.959_964).abs() < 1e-4, "G = {g}");
    }

    #[test]
    fn test_grubbs_table_values() {
        // Two-sided Grubbs table, alpha = 0.05.
        assert!((grubbs_critical_value(10, 0.05) - 2.290).abs() < 2e-3);
        assert!((grubbs_critical_value(20, 0.05) - 2.709).abs() < 2e-3);
    }

    #[test]
    fn test_bound_never_exceeds_max_possible_z() {
        // |z| in a sample of n is at most (n-1)/sqrt(n).
        for n in 3..50 {
            let limit = (n as f64 - 1.0) / (n as f64).sqrt();
            let g = jackknife_critical_value(n, 0.95, 3.0);
            assert!(g < limit + 1e-12, "n={n}: {g} >= {limit}");
        }
    }

    #[test]
    fn test_dof_clamps_to_one() {
        assert_eq!(jackknife_dof(3, 3.0), 1.0);
        assert_eq!(jackknife_dof(2, 10.0), 1.0);
        assert_eq!(jackknife_dof(10, 3.0), 7.0);
        assert_eq!(jackknife_dof(10, 2.5), 7.5);
    }

    #[test]
    fn test_undersized_samples_never_reject() {
        assert_eq!(grubbs_bound(2, 3.0), f64::MAX);
        assert_eq!(grubbs_critical_value(2, 0.05), f64::MAX);
    }
}
