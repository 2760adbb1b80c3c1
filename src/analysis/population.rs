//! Random state populations.
//!
//! All candidates of a sweep must be measured against the same sample, so
//! populations are generated once into an owned buffer and shared
//! read-only afterwards.

use tracing::debug;

use crate::error::{ParamError, Result};
use crate::permutation::{CHACHA_CONSTANTS, STATE_WORDS, State};
use crate::rng::EntropySource;

/// Draws one state: sixteen random words, then the four constants.
pub fn generate_state<S: EntropySource + ?Sized>(source: &mut S) -> Result<State> {
    let mut state = [0u32; STATE_WORDS];
    source.fill_words(&mut state)?;
    state[..CHACHA_CONSTANTS.len()].copy_from_slice(&CHACHA_CONSTANTS);
    Ok(state)
}

/// Draws `count` independent states in a single request to `source`.
pub fn generate_states<S: EntropySource + ?Sized>(count: usize, source: &mut S) -> Result<Vec<State>> {
    if count == 0 {
        return Err(ParamError::EmptyPopulation.into());
    }

    let mut states = vec![[0u32; STATE_WORDS]; count];
    source.fill_words(states.as_flattened_mut())?;

    for state in &mut states {
        state[..CHACHA_CONSTANTS.len()].copy_from_slice(&CHACHA_CONSTANTS);
    }

    debug!(count, "sampled state population");

    Ok(states)
}
