use chacha_pnb::analysis::{
    PnbParams, PnbSweep, evaluate_candidates, generate_states, sweep_pnb,
};
use chacha_pnb::permutation::{
    BitPosition, Finalization, State, block_transform, invert_partial_rounds,
};
use chacha_pnb::rng::Csprng;
use chacha_pnb::{Error, ParamError};

fn population(seed: u64, count: usize) -> Vec<State> {
    generate_states(count, &mut Csprng::from_u64(seed)).unwrap()
}

/// Straight-line version of one trial, written independently of the
/// sweep engine.
fn reference_match(x: &State, f: usize, i: u32, params: &PnbParams) -> bool {
    let mut x_prime = *x;
    x_prime[params.difference.word] ^= 1 << params.difference.bit;

    let x3 = block_transform(x, params.boundary, Finalization::Raw);
    let x3_prime = block_transform(&x_prime, params.boundary, Finalization::Raw);
    let z = block_transform(x, params.rounds, Finalization::FeedForward);
    let z_prime = block_transform(&x_prime, params.rounds, Finalization::FeedForward);

    let mut xt = *x;
    xt[f] ^= 1 << i;
    let mut xt_prime = x_prime;
    xt_prime[f] ^= 1 << i;

    let mut back: State = std::array::from_fn(|k| z[k].wrapping_sub(xt[k]));
    let mut back_prime: State = std::array::from_fn(|k| z_prime[k].wrapping_sub(xt_prime[k]));
    invert_partial_rounds(&mut back, params.boundary..params.rounds);
    invert_partial_rounds(&mut back_prime, params.boundary..params.rounds);

    let (w, b) = (params.output.word, params.output.bit);
    let forward = ((x3[w] >> b) ^ (x3_prime[w] >> b)) & 1;
    let backward = ((back[w] >> b) ^ (back_prime[w] >> b)) & 1;

    forward == backward
}

#[test]
fn sweep_matches_reference_trials() {
    let states = population(6, 128);
    let params = PnbParams::default();
    let sweep = PnbSweep::new(&states, params.clone()).unwrap();

    for (f, i) in [(4, 0), (5, 17), (7, 31), (10, 6), (11, 0)] {
        let expected = states
            .iter()
            .filter(|x| reference_match(x, f, i, &params))
            .count() as u64;

        let measured = sweep.evaluate(BitPosition::new(f, i)).unwrap();
        assert_eq!(measured.bias.matches(), expected, "candidate ({f}, {i})");
    }
}

#[test]
fn candidates_are_ordered_by_word_then_bit() {
    let states = population(1, 16);
    let all = evaluate_candidates(&states, &PnbParams::default()).unwrap();

    assert_eq!(all.len(), 256);
    for (k, c) in all.iter().enumerate() {
        assert_eq!(c.linear_index(), k);
        assert_eq!(c.word(), 4 + k / 32);
        assert_eq!(c.bit() as usize, k % 32);
        assert_eq!(c.bias.trials(), 16);
    }
}

#[test]
fn no_backward_rounds_makes_every_bit_neutral() {
    // With nothing to invert, a wrong key bit only perturbs its own word,
    // and bit 0 of word 11 differs the same way in both members.
    let states = population(2, 256);
    let params = PnbParams {
        rounds: 4,
        boundary: 4,
        ..Default::default()
    };

    let found = sweep_pnb(&states, &params).unwrap();

    assert_eq!(found.len(), 256);
    assert!(found.iter().all(|c| c.gamma() == 1.0));
}

#[test]
fn threshold_filters_uncorrelated_candidates() {
    let states = population(3, 512);
    let params = PnbParams {
        rounds: 7,
        boundary: 3,
        ..Default::default()
    };

    let all = evaluate_candidates(&states, &params).unwrap();
    let found = sweep_pnb(&states, &params).unwrap();

    let expected: Vec<_> = all
        .iter()
        .filter(|c| c.gamma().abs() >= params.threshold)
        .copied()
        .collect();
    assert_eq!(found, expected);

    let flat = all
        .iter()
        .find(|c| c.gamma().abs() < 0.2)
        .expect("four backward rounds leave some key bit uncorrelated");
    assert!(!found.iter().any(|c| c.position == flat.position));
    assert!(found.len() < all.len());
}

#[test]
fn sweep_is_reproducible() {
    let params = PnbParams {
        candidate_words: 4..6,
        ..Default::default()
    };

    let a = evaluate_candidates(&population(9, 256), &params).unwrap();
    let b = evaluate_candidates(&population(9, 256), &params).unwrap();

    assert_eq!(a.len(), 64);
    assert_eq!(a, b);
}

#[test]
fn evaluate_accepts_positions_outside_sweep_ranges() {
    let states = population(4, 64);
    let sweep = PnbSweep::new(
        &states,
        PnbParams {
            rounds: 3,
            boundary: 3,
            ..Default::default()
        },
    )
    .unwrap();

    let nonce_bit = sweep.evaluate(BitPosition::new(14, 9)).unwrap();
    assert_eq!(nonce_bit.gamma(), 1.0);
    assert_eq!(nonce_bit.linear_index(), 10 * 32 + 9);

    let last_key_bit = sweep.evaluate(BitPosition::new(11, 31)).unwrap();
    assert_eq!(last_key_bit.linear_index(), 255);

    assert!(matches!(
        sweep.evaluate(BitPosition::new(1, 0)),
        Err(Error::InvalidParams(ParamError::ConstantWord(1)))
    ));
}

#[test]
fn invalid_params_are_rejected() {
    let states = population(5, 4);

    let cases = [
        (
            PnbParams {
                boundary: 7,
                ..Default::default()
            },
            ParamError::BoundaryPastRounds {
                boundary: 7,
                rounds: 6,
            },
        ),
        (
            PnbParams {
                threshold: 1.5,
                ..Default::default()
            },
            ParamError::ThresholdOutOfRange(1.5),
        ),
        (
            PnbParams {
                candidate_words: 2..6,
                ..Default::default()
            },
            ParamError::ConstantWord(2),
        ),
        (
            PnbParams {
                candidate_words: 8..17,
                ..Default::default()
            },
            ParamError::WordOutOfRange(16),
        ),
        (
            PnbParams {
                candidate_bits: 0..33,
                ..Default::default()
            },
            ParamError::BitOutOfRange(32),
        ),
        (
            PnbParams {
                candidate_bits: 5..5,
                ..Default::default()
            },
            ParamError::EmptyCandidateRange { start: 5, end: 5 },
        ),
    ];

    for (params, expected) in cases {
        match sweep_pnb(&states, &params) {
            Err(Error::InvalidParams(err)) => assert_eq!(err, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }

    assert!(matches!(
        sweep_pnb(&[], &PnbParams::default()),
        Err(Error::InvalidParams(ParamError::EmptyPopulation))
    ));
}
