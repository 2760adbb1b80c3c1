//! Parameter definitions and validation for the analysis engines.
//!
//! Every research parameter is a runtime field. The `Default` impls carry
//! the canonical configuration: input difference at word 13 bit 13, output
//! bit 0 of word 11, PNB significance threshold 0.6.

use std::ops::Range;

use crate::error::ParamError;
use crate::permutation::state::FIRST_VARIABLE_WORD;
use crate::permutation::{BitPosition, Finalization, STATE_WORDS};

/// Canonical single-bit input difference.
pub const DEFAULT_DIFFERENCE: BitPosition = BitPosition::new(13, 13);

/// Canonical output bit compared between the two members of a pair.
pub const DEFAULT_OUTPUT: BitPosition = BitPosition::new(11, 0);

/// Canonical PNB significance threshold on `|γ|`.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Configuration of the differential trial engine.
#[derive(Clone, Debug, PartialEq)]
pub struct DifferentialParams {
    /// Number of rounds run on both members of the pair.
    pub rounds: usize,
    /// Bit flipped to form the second member of the pair.
    pub difference: BitPosition,
    /// Bit compared between the two outputs.
    pub output: BitPosition,
    /// Whether the input is added back after the last round.
    pub finalization: Finalization,
}

impl DifferentialParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_rounds(self.rounds)?;
        check_difference(self.difference)?;
        check_position(self.output)
    }
}

impl Default for DifferentialParams {
    /// Three rounds, feed-forward, canonical difference and output bit.
    fn default() -> Self {
        Self {
            rounds: 3,
            difference: DEFAULT_DIFFERENCE,
            output: DEFAULT_OUTPUT,
            finalization: Finalization::FeedForward,
        }
    }
}

/// Configuration of the PNB sweep engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PnbParams {
    /// Total number of forward rounds.
    pub rounds: usize,
    /// Number of rounds after which the differential is observed. Rounds
    /// `boundary..rounds` are undone during the backward step.
    pub boundary: usize,
    /// Input difference.
    pub difference: BitPosition,
    /// Bit of the round-`boundary` state whose difference is tracked.
    pub output: BitPosition,
    /// Candidate words, swept in ascending order.
    pub candidate_words: Range<usize>,
    /// Candidate bits within each word, swept in ascending order.
    pub candidate_bits: Range<u32>,
    /// Candidates with `|γ| >= threshold` are reported.
    pub threshold: f64,
}

impl PnbParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_rounds(self.rounds)?;

        if self.boundary > self.rounds {
            return Err(ParamError::BoundaryPastRounds {
                boundary: self.boundary,
                rounds: self.rounds,
            });
        }

        check_difference(self.difference)?;
        check_position(self.output)?;

        let words = &self.candidate_words;
        if words.is_empty() {
            return Err(ParamError::EmptyCandidateRange {
                start: words.start,
                end: words.end,
            });
        }
        if words.start < FIRST_VARIABLE_WORD {
            return Err(ParamError::ConstantWord(words.start));
        }
        if words.end > STATE_WORDS {
            return Err(ParamError::WordOutOfRange(words.end - 1));
        }

        let bits = &self.candidate_bits;
        if bits.is_empty() {
            return Err(ParamError::EmptyCandidateRange {
                start: bits.start as usize,
                end: bits.end as usize,
            });
        }
        if bits.end > u32::BITS {
            return Err(ParamError::BitOutOfRange(bits.end - 1));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ParamError::ThresholdOutOfRange(self.threshold));
        }

        Ok(())
    }

    /// Number of candidates the sweep evaluates.
    pub fn candidate_count(&self) -> usize {
        self.candidate_words.len() * self.candidate_bits.len()
    }
}

impl Default for PnbParams {
    /// Six rounds observed after three, the 256 key bits as candidates.
    fn default() -> Self {
        Self {
            rounds: 6,
            boundary: 3,
            difference: DEFAULT_DIFFERENCE,
            output: DEFAULT_OUTPUT,
            candidate_words: 4..12,
            candidate_bits: 0..32,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn check_rounds(rounds: usize) -> Result<(), ParamError> {
    if rounds == 0 {
        return Err(ParamError::ZeroRounds);
    }
    Ok(())
}

pub(crate) fn check_position(pos: BitPosition) -> Result<(), ParamError> {
    if pos.word >= STATE_WORDS {
        return Err(ParamError::WordOutOfRange(pos.word));
    }
    if pos.bit >= u32::BITS {
        return Err(ParamError::BitOutOfRange(pos.bit));
    }
    Ok(())
}

/// A position that is flipped must not touch the constant words.
pub(crate) fn check_difference(pos: BitPosition) -> Result<(), ParamError> {
    check_position(pos)?;
    if pos.word < FIRST_VARIABLE_WORD {
        return Err(ParamError::ConstantWord(pos.word));
    }
    Ok(())
}
