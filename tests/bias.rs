use chacha_pnb::ParamError;
use chacha_pnb::analysis::{Bias, probability_and_gamma};
use proptest::prelude::*;

#[test]
fn bias_extremes() {
    assert_eq!(probability_and_gamma(10, 10).unwrap(), (1.0, 1.0));
    assert_eq!(probability_and_gamma(0, 10).unwrap(), (0.0, -1.0));
    assert_eq!(probability_and_gamma(5, 10).unwrap(), (0.5, 0.0));
}

#[test]
fn bias_significance_is_symmetric() {
    let high = Bias::from_counts(85, 100).unwrap();
    let low = Bias::from_counts(15, 100).unwrap();
    let flat = Bias::from_counts(55, 100).unwrap();

    assert!(high.is_significant(0.6));
    assert!(low.is_significant(0.6));
    assert!(!flat.is_significant(0.6));
}

#[test]
fn bias_threshold_is_inclusive() {
    let edge = Bias::from_counts(80, 100).unwrap();
    assert!(edge.is_significant(0.6));
}

#[test]
fn bias_rejects_bad_counts() {
    assert_eq!(Bias::from_counts(0, 0), Err(ParamError::EmptyPopulation));
    assert_eq!(
        Bias::from_counts(11, 10),
        Err(ParamError::MatchesExceedTrials {
            matches: 11,
            trials: 10
        })
    );
}

proptest! {
    #[test]
    fn prop_bias_in_range(trials in 1u64..1_000_000, frac in 0.0f64..=1.0) {
        let matches = ((trials as f64) * frac) as u64;
        let (p, gamma) = probability_and_gamma(matches, trials).unwrap();

        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!((-1.0..=1.0).contains(&gamma));
        prop_assert_eq!(gamma == 1.0, matches == trials);
        prop_assert_eq!(gamma == -1.0, matches == 0);
    }
}
