//! Bit Math
//!
//! Most significant bit search over 256-bit words.

use crate::big_num::{U256, U512};
use crate::errors::{MathError, Result};

/// Thresholds 2^128, 2^64, ... 2^1 paired with their exponent
const POWERS_OF_2: [(u8, U256); 8] = [
    (128, U256([0, 0, 1, 0])),
    (64, U256([0, 1, 0, 0])),
    (32, U256([1 << 32, 0, 0, 0])),
    (16, U256([1 << 16, 0, 0, 0])),
    (8, U256([1 << 8, 0, 0, 0])),
    (4, U256([1 << 4, 0, 0, 0])),
    (2, U256([1 << 2, 0, 0, 0])),
    (1, U256([1 << 1, 0, 0, 0])),
];

/// Find the most significant bit (position of highest set bit, 0..=255)
///
/// Binary reduction over eight thresholds.
pub fn most_significant_bit(x: U256) -> Result<u8> {
    if x.is_zero() {
        return Err(MathError::ZeroInput);
    }

    let mut n = x;
    let mut r = 0u8;

    for (power, min) in POWERS_OF_2.iter() {
        if n >= *min {
            n = n >> *power;
            r += *power;
        }
    }

    Ok(r)
}

/// Same search for a value that may not fit in 256 bits
/// Fails with `Overflow` (RANGE) above 2^256 - 1
pub fn most_significant_bit_wide(x: U512) -> Result<u8> {
    if x.is_zero() {
        return Err(MathError::ZeroInput);
    }
    let narrowed = x.narrow().ok_or(MathError::Overflow)?;
    most_significant_bit(narrowed)
}
