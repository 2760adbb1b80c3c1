use chacha_pnb::ParamError;
use chacha_pnb::analysis::{
    Bias, ComplexityParams, PnbCandidate, estimate_complexity, neutrality_bias,
};
use chacha_pnb::permutation::BitPosition;

#[test]
fn default_parameters() {
    let c = estimate_complexity(&ComplexityParams::default()).unwrap();

    // N ≈ 2^33.02; the 2^156 filter term dominates C.
    assert!((33.0..33.05).contains(&c.log2_data()), "{}", c.log2_data());
    assert!((156.0..156.2).contains(&c.log2_time()), "{}", c.log2_time());
}

#[test]
fn stronger_bias_needs_less_data() {
    let weak = estimate_complexity(&ComplexityParams::default()).unwrap();
    let strong = estimate_complexity(&ComplexityParams {
        epsilon_a: 0.4,
        ..Default::default()
    })
    .unwrap();

    assert!(strong.data < weak.data);
    assert!(strong.time <= weak.time);
}

#[test]
fn invalid_inputs_are_rejected() {
    let zero_bias = ComplexityParams {
        epsilon_d: 0.0,
        ..Default::default()
    };
    assert_eq!(
        estimate_complexity(&zero_bias),
        Err(ParamError::BiasOutOfRange(0.0))
    );

    let too_many = ComplexityParams {
        neutral_bits: 300,
        ..Default::default()
    };
    assert_eq!(
        estimate_complexity(&too_many),
        Err(ParamError::TooManyKeyBits(300))
    );

    let wide_alpha = ComplexityParams {
        alpha: 257,
        ..Default::default()
    };
    assert_eq!(
        estimate_complexity(&wide_alpha),
        Err(ParamError::AlphaOutOfRange(257))
    );
}

#[test]
fn neutrality_bias_averages_magnitudes() {
    let candidate = |bit, matches| PnbCandidate {
        position: BitPosition::new(4, bit),
        bias: Bias::from_counts(matches, 100).unwrap(),
    };

    let set = [candidate(0, 90), candidate(1, 10), candidate(2, 75)];
    let eps = neutrality_bias(&set).unwrap();

    assert!((eps - 0.7).abs() < 1e-12);
    assert_eq!(neutrality_bias(&[]), None);
}
