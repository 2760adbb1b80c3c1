//! Random number generation module
//!
//! Sampling populations of ChaCha states needs a source of uniformly
//! distributed 32-bit words. The sampler does not care where they come
//! from, so sources are injected through the [`EntropySource`] trait.
//!
//! Two sources are provided:
//! - [`Csprng`]: a ChaCha20-based deterministic random bit generator
//!   (DRBG). Seeded explicitly, it makes experiments reproducible.
//! - [`OsEntropy`]: direct operating system randomness.

mod chacha20drbg;
mod csprng;
mod entropy;

pub use csprng::Csprng;
pub use entropy::{EntropySource, OsEntropy};
