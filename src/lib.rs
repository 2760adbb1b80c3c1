//! Reduced-round ChaCha cryptanalysis toolkit
//!
//! This crate implements the ChaCha permutation in both directions and
//! uses it to estimate the statistical biases behind differential attacks
//! on reduced-round ChaCha, including the search for probabilistic neutral
//! bits (PNBs).
//!
//! The focus is on **exact bit-level semantics and reproducible
//! sampling**, not on encryption. There is no key schedule, nonce
//! handling or keystream API, and nothing here is hardened against side
//! channels.
//!
//! # Module overview
//!
//! - `permutation`
//!   Rotations, the forward and inverse quarter round, the block transform
//!   with a configurable number of rounds and optional intermediate
//!   snapshot, and partial inversion of any range of rounds.
//!
//! - `rng`
//!   Entropy sources behind the [`rng::EntropySource`] trait: a seedable
//!   ChaCha20 DRBG for reproducible experiments and direct operating
//!   system randomness.
//!
//! - `analysis`
//!   State population sampling, the differential trial engine, the PNB
//!   sweep engine, bias computation, and the attack complexity estimate.
//!
//! - `error`
//!   Configuration and entropy errors. Parameters are validated before any
//!   trial runs; the permutation arithmetic itself never fails.
//!
//! # Example
//!
//! ```rust, ignore
//! use chacha_pnb::analysis::{PnbParams, generate_states, sweep_pnb};
//! use chacha_pnb::rng::Csprng;
//!
//! let mut rng = Csprng::from_u64(2024);
//! let population = generate_states(10_000, &mut rng)?;
//!
//! for pnb in sweep_pnb(&population, &PnbParams::default())? {
//!     println!("{:3} γ={:.6}", pnb.linear_index(), pnb.gamma());
//! }
//! ```
//!
//! # Logging
//!
//! Engines emit `tracing` events (population sizes, resulting biases,
//! significant candidates). No subscriber is installed by the library.

mod os;

pub mod analysis;
pub mod error;
pub mod permutation;
pub mod rng;

pub use error::{EntropyError, Error, ParamError, Result};
