//! ChaCha state layout and bit addressing.

/// Number of 32-bit words in a ChaCha state.
pub const STATE_WORDS: usize = 16;

/// A ChaCha state: sixteen 32-bit words.
///
/// Words 0–3 hold [`CHACHA_CONSTANTS`]; words 4–15 carry key, counter and
/// nonce material.
pub type State = [u32; STATE_WORDS];

/// ChaCha constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words, as defined in RFC 8439.
pub const CHACHA_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Index of the first non-constant word.
pub(crate) const FIRST_VARIABLE_WORD: usize = CHACHA_CONSTANTS.len();

/// A single bit inside a [`State`], addressed by word and bit index.
///
/// Bit 0 is the least significant bit of the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitPosition {
    pub word: usize,
    pub bit: u32,
}

impl BitPosition {
    pub const fn new(word: usize, bit: u32) -> Self {
        Self { word, bit }
    }

    /// Returns `true` if the position lies inside a state.
    pub const fn in_bounds(&self) -> bool {
        self.word < STATE_WORDS && self.bit < u32::BITS
    }

    /// Single-bit mask for the addressed word.
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        1 << self.bit
    }

    /// Reads the addressed bit as `0` or `1`.
    #[inline(always)]
    pub fn get(&self, state: &State) -> u32 {
        (state[self.word] >> self.bit) & 1
    }

    /// Flips the addressed bit in place.
    #[inline(always)]
    pub fn flip(&self, state: &mut State) {
        state[self.word] ^= self.mask();
    }

    /// Returns a copy of `state` with the addressed bit flipped.
    #[inline(always)]
    pub fn flipped(&self, state: &State) -> State {
        let mut out = *state;
        self.flip(&mut out);
        out
    }
}

impl From<(usize, u32)> for BitPosition {
    fn from((word, bit): (usize, u32)) -> Self {
        Self::new(word, bit)
    }
}
