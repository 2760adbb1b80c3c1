//! Single-bit differential bias estimation.
//!
//! For each base state `X` of the population, the pair `(X, X ⊕ e)` is run
//! through the reduced-round transform and one output bit is compared. The
//! fraction of pairs agreeing on that bit measures how well the
//! difference is absorbed after the given number of rounds.

use rayon::prelude::*;
use tracing::{debug, info};

use super::bias::Bias;
use super::params::DifferentialParams;
use crate::error::{ParamError, Result};
use crate::permutation::{State, block_transform};

/// Runs one differential trial.
///
/// Returns `true` when both members of the pair agree on the output bit.
pub fn run_differential_trial(state: &State, params: &DifferentialParams) -> Result<bool> {
    params.validate()?;
    Ok(trial(state, params))
}

#[inline]
fn trial(state: &State, params: &DifferentialParams) -> bool {
    let prime = params.difference.flipped(state);

    let out = block_transform(state, params.rounds, params.finalization);
    let out_prime = block_transform(&prime, params.rounds, params.finalization);

    params.output.get(&out) == params.output.get(&out_prime)
}

/// Estimates the differential bias over `population`.
///
/// Trials are split across the rayon pool; each worker counts its own
/// matches and the counts are summed once at the end.
pub fn estimate_bias(population: &[State], params: &DifferentialParams) -> Result<Bias> {
    params.validate()?;
    if population.is_empty() {
        return Err(ParamError::EmptyPopulation.into());
    }

    debug!(
        rounds = params.rounds,
        trials = population.len(),
        "estimating differential bias"
    );

    let matches = population
        .par_iter()
        .filter(|state| trial(state, params))
        .count();

    let bias = Bias::from_counts(matches as u64, population.len() as u64)?;

    info!(
        rounds = params.rounds,
        probability = bias.probability(),
        gamma = bias.gamma(),
        "differential bias"
    );

    Ok(bias)
}
