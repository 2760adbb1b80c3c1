//! Pluggable entropy sources.

use crate::error::EntropyError;
use crate::os::sys_random;

/// A source of uniformly distributed 32-bit words.
///
/// Failures are reported, never retried: a sampler that cannot obtain
/// randomness must stop.
pub trait EntropySource {
    /// Fills `out` with uniformly random words.
    fn fill_words(&mut self, out: &mut [u32]) -> Result<(), EntropyError>;
}

/// Operating system randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_words(&mut self, out: &mut [u32]) -> Result<(), EntropyError> {
        let mut bytes = vec![0u8; out.len() * 4];
        sys_random(&mut bytes)?;
        words_from_le_bytes(&bytes, out);
        Ok(())
    }
}

/// Decodes little-endian bytes into `out`, four bytes per word.
pub(crate) fn words_from_le_bytes(bytes: &[u8], out: &mut [u32]) {
    out.iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(w, b)| *w = u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
}
