//! Monte-Carlo bias estimation for reduced-round ChaCha.
//!
//! The engines in this module sample populations of random ChaCha states
//! and measure how strongly a single-bit input difference survives a given
//! number of rounds:
//!
//! - [`differential`]: forward-only differential bias of one output bit.
//! - [`pnb`]: probabilistic-neutral-bit search, combining the forward
//!   differential with a backward walk from the final output under a
//!   wrong key guess.
//! - [`complexity`]: turns the measured biases into data and time
//!   complexity figures for the resulting key-recovery attack.
//!
//! # Sampling discipline
//!
//! Populations are generated once ([`generate_states`]) and passed by
//! reference. Every candidate of a sweep sees the identical sample, which
//! is what makes their biases comparable. Nothing is cached between calls
//! and there is no global state.
//!
//! # Parallelism
//!
//! Trials and candidates are independent. Both engines fan work out over
//! the rayon global pool with per-worker counters reduced at the end.

pub mod bias;
pub mod complexity;
pub mod differential;
pub mod params;
pub mod pnb;
pub mod population;

pub use bias::{Bias, PnbCandidate, probability_and_gamma};
pub use complexity::{AttackComplexity, ComplexityParams, estimate_complexity, neutrality_bias};
pub use differential::{estimate_bias, run_differential_trial};
pub use params::{
    DEFAULT_DIFFERENCE, DEFAULT_OUTPUT, DEFAULT_THRESHOLD, DifferentialParams, PnbParams,
};
pub use pnb::{PnbSweep, evaluate_candidates, sweep_pnb};
pub use population::{generate_state, generate_states};
