//! Attack complexity estimate for a PNB-based key recovery.
//!
//! With a differential bias `ε_d`, a neutrality bias `ε_a` for the chosen
//! set of `n` neutral bits, and a false-alarm parameter `α`, the attack
//! needs
//!
//! ```text
//! N = ((√(α·ln 4) + 3·√(1 − ε²)) / ε)²        ε = ε_d·ε_a
//! C = 2^m·N + 2^(256 − α) + 2^n               m = 256 − n
//! ```
//!
//! samples (data complexity) and operations (time complexity).

use super::bias::PnbCandidate;
use crate::error::ParamError;

/// Number of key bits in ChaCha.
const KEY_BITS: u32 = 256;

/// Inputs of the complexity estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexityParams {
    /// Differential bias `ε_d`.
    pub epsilon_d: f64,
    /// Neutrality bias `ε_a`.
    pub epsilon_a: f64,
    /// Number of probabilistic neutral bits.
    pub neutral_bits: u32,
    /// False-alarm parameter.
    pub alpha: u32,
}

impl ComplexityParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        for eps in [self.epsilon_d, self.epsilon_a] {
            if !(eps > 0.0 && eps <= 1.0) {
                return Err(ParamError::BiasOutOfRange(eps));
            }
        }
        if self.neutral_bits > KEY_BITS {
            return Err(ParamError::TooManyKeyBits(self.neutral_bits));
        }
        if self.alpha > KEY_BITS {
            return Err(ParamError::AlphaOutOfRange(self.alpha));
        }
        Ok(())
    }
}

impl Default for ComplexityParams {
    fn default() -> Self {
        Self {
            epsilon_d: 0.000792,
            epsilon_a: 0.2,
            neutral_bits: 137,
            alpha: 100,
        }
    }
}

/// Data and time complexity of the attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackComplexity {
    /// Number of samples `N`.
    pub data: f64,
    /// Number of operations `C`.
    pub time: f64,
}

impl AttackComplexity {
    pub fn log2_data(&self) -> f64 {
        self.data.log2()
    }

    pub fn log2_time(&self) -> f64 {
        self.time.log2()
    }
}

/// Computes `N` and `C`.
pub fn estimate_complexity(params: &ComplexityParams) -> Result<AttackComplexity, ParamError> {
    params.validate()?;

    let eps = params.epsilon_d * params.epsilon_a;
    let alpha = f64::from(params.alpha);

    let numerator = (alpha * 4f64.ln()).sqrt() + 3.0 * (1.0 - eps * eps).sqrt();
    let data = (numerator / eps).powi(2);

    let m = KEY_BITS - params.neutral_bits;
    let time = 2f64.powi(m as i32) * data
        + 2f64.powi((KEY_BITS - params.alpha) as i32)
        + 2f64.powi(params.neutral_bits as i32);

    Ok(AttackComplexity { data, time })
}

/// Mean `|γ|` over a set of neutral bits, usable as `ε_a`.
///
/// Returns `None` for an empty set.
pub fn neutrality_bias(candidates: &[PnbCandidate]) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }

    let total: f64 = candidates.iter().map(|c| c.gamma().abs()).sum();
    Some(total / candidates.len() as f64)
}
