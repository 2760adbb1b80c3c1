//! Match counts, probabilities and biases.
//!
//! A trial population yields `matches` successes out of `trials`. The
//! match probability is `p = matches / trials` and the bias (correlation)
//! is `γ = 2p − 1`, so `γ = 0` means no correlation and `|γ| = 1` means the
//! outcome is fully determined.

use crate::error::ParamError;
use crate::permutation::BitPosition;
use crate::permutation::state::FIRST_VARIABLE_WORD;

/// Finalized result of a trial population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bias {
    matches: u64,
    trials: u64,
}

impl Bias {
    /// Builds a bias from raw counts.
    ///
    /// Fails if there are no trials or more matches than trials.
    pub fn from_counts(matches: u64, trials: u64) -> Result<Self, ParamError> {
        if trials == 0 {
            return Err(ParamError::EmptyPopulation);
        }
        if matches > trials {
            return Err(ParamError::MatchesExceedTrials { matches, trials });
        }
        Ok(Self { matches, trials })
    }

    pub fn matches(&self) -> u64 {
        self.matches
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Match probability `p`, in `[0, 1]`.
    pub fn probability(&self) -> f64 {
        self.matches as f64 / self.trials as f64
    }

    /// Bias `γ = 2p − 1`, in `[−1, 1]`.
    pub fn gamma(&self) -> f64 {
        2.0 * self.probability() - 1.0
    }

    /// Whether `|γ|` reaches `threshold`.
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.gamma().abs() >= threshold
    }
}

/// `(matches, trials) → (p, γ)`.
pub fn probability_and_gamma(matches: u64, trials: u64) -> Result<(f64, f64), ParamError> {
    let bias = Bias::from_counts(matches, trials)?;
    Ok((bias.probability(), bias.gamma()))
}

/// Bias measured for one candidate neutral bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PnbCandidate {
    /// The flipped key bit.
    pub position: BitPosition,
    pub bias: Bias,
}

impl PnbCandidate {
    pub fn word(&self) -> usize {
        self.position.word
    }

    pub fn bit(&self) -> u32 {
        self.position.bit
    }

    /// Bit index counted from word 4, `(word − 4)·32 + bit`.
    ///
    /// Key bits (words 4..12) map to `0..256`; counter and nonce words
    /// continue past 255.
    pub fn linear_index(&self) -> usize {
        (self.position.word - FIRST_VARIABLE_WORD) * u32::BITS as usize + self.position.bit as usize
    }

    pub fn probability(&self) -> f64 {
        self.bias.probability()
    }

    pub fn gamma(&self) -> f64 {
        self.bias.gamma()
    }
}
