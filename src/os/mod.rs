//! Operating system abstraction layer
//!
//! This module provides access to operating system randomness. Platform
//! selection is delegated to the `getrandom` crate, which picks the right
//! primitive (`getrandom(2)`, `getentropy`, `BCryptGenRandom`, ...) at
//! compile time.
//!
//! Unlike a cryptographic library, a statistical sampler can report a
//! failure and stop cleanly, so errors are returned instead of panicking.

use crate::error::EntropyError;

/// Fills a buffer with random bytes from the operating system.
///
/// Partial reads are handled by `getrandom`; on success the buffer is
/// fully initialized.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    getrandom::getrandom(buf)?;
    Ok(())
}
