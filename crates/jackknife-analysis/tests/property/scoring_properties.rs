use jackknife_analysis::{JackKnife, NoOutlier};
use jackknife_core::{Dataset, Identity, Record};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 0..60)
}

proptest! {
    #[test]
    fn every_record_is_scored_once_in_order(v in values()) {
        let ds = Dataset::from_values(&v).unwrap();
        let result = JackKnife::default().score(&ds);
        prop_assert_eq!(result.len(), v.len());
        for (i, r) in result.records.iter().enumerate() {
            prop_assert_eq!(&r.identity, &Identity::Index(i));
            prop_assert_eq!(r.value, v[i]);
            prop_assert!(r.z_score.is_finite());
        }
    }

    #[test]
    fn active_set_shrinks_by_one_per_step(v in values()) {
        let ds = Dataset::from_values(&v).unwrap();
        let result = JackKnife::default().score(&ds);
        for (k, step) in result.steps.iter().enumerate() {
            prop_assert_eq!(step.active_size, v.len() - k);
            prop_assert!(step.z_score.abs() > step.critical_value);
        }
        prop_assert!(result.steps.len() <= v.len().saturating_sub(2));
        prop_assert_eq!(result.final_stats.count, v.len() - result.steps.len());
        prop_assert_eq!(result.outliers().count(), result.steps.len());
    }

    #[test]
    fn explicit_identities_survive_removal(v in values()) {
        let records: Vec<Record> = v
            .iter()
            .enumerate()
            .map(|(i, &x)| Record::new(format!("id-{i}"), x))
            .collect();
        let ds = Dataset::new(records.clone()).unwrap();
        let result = JackKnife::default().score(&ds);
        for (scored, original) in result.records.iter().zip(&records) {
            prop_assert_eq!(&scored.identity, &original.identity);
        }
        for step in &result.steps {
            prop_assert_eq!(&step.identity, &records[step.position].identity);
        }
    }

    #[test]
    fn no_outlier_is_pure(v in values()) {
        let ds = Dataset::from_values(&v).unwrap();
        let engine = NoOutlier::default();
        prop_assert_eq!(engine.score(&ds), engine.score(&ds));
    }

    #[test]
    fn constant_data_is_degenerate(x in -1.0e3..1.0e3f64, n in 0usize..40) {
        let ds = Dataset::from_values(&vec![x; n]).unwrap();
        let result = JackKnife::default().score(&ds);
        prop_assert!(result.steps.is_empty());
        prop_assert!(result.z_scores().iter().all(|&z| z == 0.0));
    }
}
