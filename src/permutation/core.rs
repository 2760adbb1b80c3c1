//! Rotation primitives and the ChaCha quarter round.
//!
//! The quarter round mixes four 32-bit words using addition modulo 2³²,
//! XOR, and fixed left rotations by 16, 12, 8 and 7 bits. Its inverse
//! replays the twelve steps backwards with subtraction and right
//! rotations.

/// Rotates `value` left by `shift` bits.
///
/// `shift` must lie in `[1, 31]`.
#[inline(always)]
pub fn rotate_left(value: u32, shift: u32) -> u32 {
    debug_assert!((1..32).contains(&shift), "rotation out of range: {shift}");
    value.rotate_left(shift)
}

/// Rotates `value` right by `shift` bits.
///
/// This is the exact inverse of [`rotate_left`] for the same `shift`.
#[inline(always)]
pub fn rotate_right(value: u32, shift: u32) -> u32 {
    debug_assert!((1..32).contains(&shift), "rotation out of range: {shift}");
    value.rotate_right(shift)
}

/// Performs one ChaCha quarter round on `[a, b, c, d]`.
///
/// Every step depends on the one before it, so the order below is part of
/// the definition:
///
/// ```text
/// a += b; d ^= a; d <<<= 16;
/// c += d; b ^= c; b <<<= 12;
/// a += b; d ^= a; d <<<= 8;
/// c += d; b ^= c; b <<<= 7;
/// ```
#[inline(always)]
pub fn quarter_round([mut a, mut b, mut c, mut d]: [u32; 4]) -> [u32; 4] {
    a = a.wrapping_add(b);
    d ^= a;
    d = rotate_left(d, 16);

    c = c.wrapping_add(d);
    b ^= c;
    b = rotate_left(b, 12);

    a = a.wrapping_add(b);
    d ^= a;
    d = rotate_left(d, 8);

    c = c.wrapping_add(d);
    b ^= c;
    b = rotate_left(b, 7);

    [a, b, c, d]
}

/// Undoes one ChaCha quarter round.
///
/// For every input, `inverse_quarter_round(quarter_round(x)) == x`.
#[inline(always)]
pub fn inverse_quarter_round([mut a, mut b, mut c, mut d]: [u32; 4]) -> [u32; 4] {
    b = rotate_right(b, 7) ^ c;
    c = c.wrapping_sub(d);

    d = rotate_right(d, 8) ^ a;
    a = a.wrapping_sub(b);

    b = rotate_right(b, 12) ^ c;
    c = c.wrapping_sub(d);

    d = rotate_right(d, 16) ^ a;
    a = a.wrapping_sub(b);

    [a, b, c, d]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RFC 8439 §2.1.1
    #[test]
    fn quarter_round_rfc_vector() {
        let out = quarter_round([0x1111_1111, 0x0102_0304, 0x9b8d_6f43, 0x0123_4567]);
        assert_eq!(out, [0xea2a_92f4, 0xcb1c_f8ce, 0x4581_472e, 0x5881_c4bb]);
    }

    #[test]
    fn inverse_undoes_small_input() {
        let mixed = quarter_round([1, 2, 3, 4]);
        assert_ne!(mixed, [1, 2, 3, 4]);
        assert_eq!(inverse_quarter_round(mixed), [1, 2, 3, 4]);
    }
}
