//! Round schedule: block transform and partial inversion.
//!
//! ChaCha alternates two kinds of rounds. Even-indexed rounds apply the
//! quarter round to the four columns of the 4×4 word matrix; odd-indexed
//! rounds apply it to the four diagonals. Round indices are absolute, so
//! `apply_rounds(state, 3..6)` starts with a diagonal round exactly as the
//! fourth round of a full transform would.

use std::ops::Range;

use super::core::{inverse_quarter_round, quarter_round};
use super::state::State;
use crate::error::ParamError;

/// Column groupings, used by even rounds.
const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];

/// Diagonal groupings, used by odd rounds.
const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

/// What to do with the permutation output once all rounds have run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Finalization {
    /// Add the input state word-wise, as the ChaCha20 block function does.
    #[default]
    FeedForward,
    /// Return the raw permutation output.
    Raw,
}

#[inline(always)]
fn groups(round: usize) -> &'static [[usize; 4]; 4] {
    if round % 2 == 0 { &COLUMNS } else { &DIAGONALS }
}

#[inline(always)]
fn gather(state: &State, [a, b, c, d]: [usize; 4]) -> [u32; 4] {
    [state[a], state[b], state[c], state[d]]
}

#[inline(always)]
fn scatter(state: &mut State, idx: [usize; 4], words: [u32; 4]) {
    idx.iter().zip(words).for_each(|(&i, w)| state[i] = w);
}

/// Applies rounds `rounds.start .. rounds.end` in place.
pub fn apply_rounds(state: &mut State, rounds: Range<usize>) {
    for round in rounds {
        for &idx in groups(round) {
            let mixed = quarter_round(gather(state, idx));
            scatter(state, idx, mixed);
        }
    }
}

/// Undoes rounds `rounds.start .. rounds.end` in place.
///
/// Rounds are undone from the last to the first and, within a round, the
/// quarter rounds are undone in reverse order. The parity of each round
/// index selects columns or diagonals exactly as in [`apply_rounds`], so
/// the buffer must be the output of the same forward range.
pub fn invert_partial_rounds(state: &mut State, rounds: Range<usize>) {
    for round in rounds.rev() {
        for &idx in groups(round).iter().rev() {
            let unmixed = inverse_quarter_round(gather(state, idx));
            scatter(state, idx, unmixed);
        }
    }
}

/// Runs `rounds` rounds of the permutation over a copy of `state`.
pub fn block_transform(state: &State, rounds: usize, finalization: Finalization) -> State {
    let mut working = *state;
    apply_rounds(&mut working, 0..rounds);
    finalize(&mut working, state, finalization);
    working
}

/// Like [`block_transform`], additionally returning the working state as
/// it was after `snapshot_after` completed rounds.
///
/// The snapshot is always the raw intermediate state; `finalization` only
/// applies to the returned output. A snapshot past the final round is
/// rejected with [`ParamError::BoundaryPastRounds`].
pub fn block_transform_with_snapshot(
    state: &State,
    rounds: usize,
    snapshot_after: usize,
    finalization: Finalization,
) -> Result<(State, State), ParamError> {
    if snapshot_after > rounds {
        return Err(ParamError::BoundaryPastRounds {
            boundary: snapshot_after,
            rounds,
        });
    }

    let mut working = *state;
    apply_rounds(&mut working, 0..snapshot_after);
    let snapshot = working;
    apply_rounds(&mut working, snapshot_after..rounds);
    finalize(&mut working, state, finalization);

    Ok((working, snapshot))
}

#[inline(always)]
fn finalize(working: &mut State, input: &State, finalization: Finalization) {
    if finalization == Finalization::FeedForward {
        add_words(working, input);
    }
}

/// Word-wise addition modulo 2³².
#[inline(always)]
pub(crate) fn add_words(acc: &mut State, rhs: &State) {
    acc.iter_mut().zip(rhs).for_each(|(a, r)| *a = a.wrapping_add(*r));
}

/// Word-wise subtraction modulo 2³².
#[inline(always)]
pub(crate) fn sub_words(acc: &mut State, rhs: &State) {
    acc.iter_mut().zip(rhs).for_each(|(a, r)| *a = a.wrapping_sub(*r));
}
