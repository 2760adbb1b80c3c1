//! ChaCha permutation core.
//!
//! This module contains the add-rotate-XOR network underlying ChaCha20,
//! exposed at the granularity needed for cryptanalysis rather than for
//! encryption:
//!
//! - single-word rotations and the forward / inverse quarter round
//! - a block transform running an arbitrary number of rounds, optionally
//!   capturing the working state after a chosen round
//! - partial inversion of any contiguous range of rounds
//!
//! Every operation is total over its inputs. The inverse functions are
//! exact algebraic inverses: undoing rounds `[0, R)` on a raw `R`-round
//! output always gives back the original state.

pub mod core;
pub mod schedule;
pub mod state;

pub use self::core::{inverse_quarter_round, quarter_round, rotate_left, rotate_right};
pub use schedule::{
    Finalization, apply_rounds, block_transform, block_transform_with_snapshot,
    invert_partial_rounds,
};
pub use state::{BitPosition, CHACHA_CONSTANTS, STATE_WORDS, State};
