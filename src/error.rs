//! Error types.
//!
//! The permutation arithmetic cannot fail. Everything that can go wrong is
//! either a rejected configuration, detected before any trial runs, or a
//! failing entropy source, which is fatal for sampling.

use thiserror::Error;

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter values.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamError),
    /// The injected entropy source could not deliver randomness.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// At least one round must run.
    #[error("round count must be at least 1")]
    ZeroRounds,
    /// The boundary round lies past the final round.
    #[error("boundary round {boundary} exceeds round count {rounds}")]
    BoundaryPastRounds { boundary: usize, rounds: usize },
    /// A word index is outside the 16-word state.
    #[error("word index {0} is outside the state")]
    WordOutOfRange(usize),
    /// A bit index is outside `[0, 32)`.
    #[error("bit index {0} is outside a 32-bit word")]
    BitOutOfRange(u32),
    /// Input differences and candidates must not touch the constant words.
    #[error("word {0} is a constant word and cannot carry a difference")]
    ConstantWord(usize),
    /// A candidate range is empty or reversed.
    #[error("candidate range {start}..{end} is empty")]
    EmptyCandidateRange { start: usize, end: usize },
    /// The significance threshold must lie in `[0, 1]`.
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    /// No trials to run.
    #[error("population is empty")]
    EmptyPopulation,
    /// More matches than trials were reported.
    #[error("{matches} matches out of {trials} trials")]
    MatchesExceedTrials { matches: u64, trials: u64 },
    /// A bias passed to the complexity estimate is outside `(0, 1]`.
    #[error("bias {0} is outside (0, 1]")]
    BiasOutOfRange(f64),
    /// A bit count larger than the 256-bit key.
    #[error("{0} exceeds the 256 key bits")]
    TooManyKeyBits(u32),
    /// The false-alarm parameter must not exceed the key size.
    #[error("alpha {0} is outside [0, 256]")]
    AlphaOutOfRange(u32),
}

/// Errors reported by an entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The operating system refused to provide randomness.
    #[error("operating system randomness unavailable: {0}")]
    Os(#[from] getrandom::Error),
    /// A finite source ran out of words.
    #[error("entropy exhausted: requested {requested} words, {available} available")]
    Exhausted { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
