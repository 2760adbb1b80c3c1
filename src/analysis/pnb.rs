//! Probabilistic neutral bit (PNB) search.
//!
//! An attacker who knows the final output `Z` of an `R`-round block, but
//! only guesses the key, can subtract the guessed input and walk the last
//! `R − boundary` rounds backwards. If the guess is wrong in a single key
//! bit, the recovered round-`boundary` state is only approximately right.
//! A key bit is *neutral* when, despite the wrong guess, the recovered
//! state still reproduces the forward differential on the tracked bit.
//!
//! For a candidate bit `(f, I)` and each base state `X`:
//!
//! ```text
//! X′  = X ⊕ Δ                      Δ: input difference
//! Z   = P_R(X)  + X                snapshot X3  after `boundary` rounds
//! Z′  = P_R(X′) + X′               snapshot X′3 after `boundary` rounds
//! XT  = P⁻¹(Z  − (X  ⊕ e_fI))      rounds boundary..R undone
//! XT′ = P⁻¹(Z′ − (X′ ⊕ e_fI))
//! match ⇔ bit(X3) ⊕ bit(X′3) = bit(XT) ⊕ bit(XT′)
//! ```
//!
//! The forward half does not depend on the candidate, so it is computed
//! once per base state and shared by every candidate of the sweep.

use rayon::prelude::*;
use tracing::{debug, info};

use super::bias::{Bias, PnbCandidate};
use super::params::{PnbParams, check_difference};
use crate::error::{ParamError, Result};
use crate::permutation::schedule::sub_words;
use crate::permutation::{
    BitPosition, Finalization, State, block_transform_with_snapshot, invert_partial_rounds,
};

/// Candidate-independent part of a trial.
#[derive(Clone, Debug)]
struct ForwardTrace {
    /// Finalized output of `X`.
    z: State,
    /// Finalized output of `X′`.
    z_prime: State,
    /// Difference of the tracked bit between the two snapshots.
    target: u32,
}

/// A PNB sweep over a fixed state population.
///
/// Construction validates the parameters and runs the forward half of
/// every trial. Candidates can then be evaluated in any order, in
/// parallel, against exactly the same sample.
pub struct PnbSweep<'a> {
    population: &'a [State],
    traces: Vec<ForwardTrace>,
    params: PnbParams,
}

impl<'a> PnbSweep<'a> {
    pub fn new(population: &'a [State], params: PnbParams) -> Result<Self> {
        params.validate()?;
        if population.is_empty() {
            return Err(ParamError::EmptyPopulation.into());
        }

        debug!(
            rounds = params.rounds,
            boundary = params.boundary,
            trials = population.len(),
            candidates = params.candidate_count(),
            "preparing pnb sweep"
        );

        let traces = population
            .par_iter()
            .map(|state| forward_trace(state, &params))
            .collect::<std::result::Result<Vec<_>, ParamError>>()?;

        Ok(Self {
            population,
            traces,
            params,
        })
    }

    pub fn params(&self) -> &PnbParams {
        &self.params
    }

    pub fn trials(&self) -> usize {
        self.population.len()
    }

    /// Candidate positions in sweep order: ascending word, then bit.
    pub fn candidates(&self) -> impl Iterator<Item = BitPosition> + '_ {
        let bits = self.params.candidate_bits.clone();
        self.params
            .candidate_words
            .clone()
            .flat_map(move |word| bits.clone().map(move |bit| BitPosition::new(word, bit)))
    }

    /// Measures the bias of one candidate.
    ///
    /// The candidate does not have to lie inside the configured ranges, but
    /// it must address a non-constant word.
    pub fn evaluate(&self, candidate: BitPosition) -> Result<PnbCandidate> {
        check_difference(candidate)?;
        self.measure(candidate)
    }

    /// Measures every candidate, in sweep order.
    pub fn evaluate_all(&self) -> Result<Vec<PnbCandidate>> {
        let candidates: Vec<BitPosition> = self.candidates().collect();

        candidates
            .into_par_iter()
            .map(|candidate| self.measure(candidate))
            .collect()
    }

    /// Measures every candidate and keeps those with `|γ| >= threshold`.
    pub fn significant(&self) -> Result<Vec<PnbCandidate>> {
        let threshold = self.params.threshold;
        let found: Vec<PnbCandidate> = self
            .evaluate_all()?
            .into_iter()
            .filter(|c| c.bias.is_significant(threshold))
            .collect();

        for c in &found {
            info!(
                word = c.word(),
                bit = c.bit(),
                index = c.linear_index(),
                probability = c.probability(),
                gamma = c.gamma(),
                "probabilistic neutral bit"
            );
        }
        info!(
            found = found.len(),
            candidates = self.params.candidate_count(),
            threshold,
            "pnb sweep complete"
        );

        Ok(found)
    }

    fn measure(&self, candidate: BitPosition) -> Result<PnbCandidate> {
        let matches = self
            .population
            .par_iter()
            .zip(self.traces.par_iter())
            .filter(|(state, trace)| self.trial(state, trace, candidate))
            .count();

        Ok(PnbCandidate {
            position: candidate,
            bias: Bias::from_counts(matches as u64, self.population.len() as u64)?,
        })
    }

    #[inline]
    fn trial(&self, state: &State, trace: &ForwardTrace, candidate: BitPosition) -> bool {
        let guess = candidate.flipped(state);
        let guess_prime = self.params.difference.flipped(&guess);

        let recovered =
            self.backward_bit(&trace.z, &guess) ^ self.backward_bit(&trace.z_prime, &guess_prime);

        recovered == trace.target
    }

    /// Subtracts the guessed input and undoes rounds `boundary..rounds`.
    #[inline]
    fn backward_bit(&self, z: &State, guess: &State) -> u32 {
        let mut working = *z;
        sub_words(&mut working, guess);
        invert_partial_rounds(&mut working, self.params.boundary..self.params.rounds);
        self.params.output.get(&working)
    }
}

fn forward_trace(
    state: &State,
    params: &PnbParams,
) -> std::result::Result<ForwardTrace, ParamError> {
    let prime = params.difference.flipped(state);

    let (z, snapshot) = block_transform_with_snapshot(
        state,
        params.rounds,
        params.boundary,
        Finalization::FeedForward,
    )?;
    let (z_prime, snapshot_prime) = block_transform_with_snapshot(
        &prime,
        params.rounds,
        params.boundary,
        Finalization::FeedForward,
    )?;

    Ok(ForwardTrace {
        z,
        z_prime,
        target: params.output.get(&snapshot) ^ params.output.get(&snapshot_prime),
    })
}

/// Evaluates every candidate of `params` against `population`, in sweep
/// order.
pub fn evaluate_candidates(population: &[State], params: &PnbParams) -> Result<Vec<PnbCandidate>> {
    PnbSweep::new(population, params.clone())?.evaluate_all()
}

/// Runs a PNB sweep and returns the significant candidates, ordered by
/// ascending word, then ascending bit.
pub fn sweep_pnb(population: &[State], params: &PnbParams) -> Result<Vec<PnbCandidate>> {
    PnbSweep::new(population, params.clone())?.significant()
}
