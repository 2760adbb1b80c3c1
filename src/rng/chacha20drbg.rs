//! ChaCha20 block function used by the DRBG.
//!
//! This is the full 20-round, feed-forward ChaCha20 block of RFC 8439,
//! built on the same permutation core the analysis engines use.

use crate::permutation::{CHACHA_CONSTANTS, Finalization, State, block_transform};

const CHACHA20_ROUNDS: usize = 20;

#[inline(always)]
fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Lays out constants, key, counter and nonce as a ChaCha state.
pub(crate) fn block_state(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> State {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA_CONSTANTS);
    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = le_word(k));
    state[12] = counter;
    state[13..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = le_word(n));

    state
}

pub(crate) fn chacha20_block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let state = block_state(key, counter, nonce);
    let words = block_transform(&state, CHACHA20_ROUNDS, Finalization::FeedForward);

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&words)
        .for_each(|(c, &w)| c.copy_from_slice(&w.to_le_bytes()));

    out
}
