//! ChaCha20-based DRBG
//!
//! This module implements a deterministic random bit generator built on
//! top of the ChaCha20 block function.
//!
//! It is the default entropy source for sampling state populations:
//! - seeded explicitly, it reproduces the same population on every run
//! - seeded from the operating system, it gives fresh populations while
//!   only touching the OS once
//! - it rekeys after every request, so consecutive requests never share
//!   keystream

use super::chacha20drbg::chacha20_block;
use super::entropy::{EntropySource, words_from_le_bytes};
use crate::error::EntropyError;
use crate::os::sys_random;

/// ChaCha20 deterministic random bit generator.
///
/// Internally, it maintains a secret key, a nonce, and a block counter.
/// After generating output, the generator rekeys itself from one extra
/// keystream block.
#[derive(Clone)]
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a new generator seeded from operating system entropy.
    ///
    /// See [`OsEntropy`](super::OsEntropy) for the underlying source.
    pub fn from_os() -> Result<Self, EntropyError> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a new generator from a 256-bit seed.
    ///
    /// The same seed always yields the same output stream.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: seed,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Creates a new generator from a 64-bit seed.
    ///
    /// Convenient for reproducible experiments; the seed is placed in the
    /// first eight key bytes, little-endian, and the rest of the key is
    /// zero.
    pub fn from_u64(seed: u64) -> Self {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&seed.to_le_bytes());

        Self::from_seed(key)
    }

    /// Fills the provided buffer with pseudorandom bytes.
    ///
    /// Randomness is generated in 64-byte blocks and copied into the
    /// output buffer. Once the buffer is filled, the generator rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let block = self.next_block();

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }

    /// Returns the next keystream block.
    ///
    /// The last counter value is never output: it is spent on a rekey, so
    /// the counter can never wrap onto keystream already handed out.
    fn next_block(&mut self) -> [u8; 64] {
        if self.counter == u32::MAX {
            self.rekey();
        }

        let block = chacha20_block(&self.key, self.counter, &self.nonce);
        self.counter += 1;
        block
    }

    /// Replaces the key with the first 32 bytes of a fresh block and
    /// restarts the counter under the new key.
    fn rekey(&mut self) {
        let block = chacha20_block(&self.key, self.counter, &self.nonce);

        self.key.copy_from_slice(&block[..32]);
        self.counter = 0;
    }
}

impl EntropySource for Csprng {
    fn fill_words(&mut self, out: &mut [u32]) -> Result<(), EntropyError> {
        let mut bytes = vec![0u8; out.len() * 4];
        self.fill_bytes(&mut bytes);
        words_from_le_bytes(&bytes, out);
        Ok(())
    }
}

impl std::fmt::Debug for Csprng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Csprng")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
