//! Fixed-width integers
//!
//! `U256` is the native word of the pricing engine; `U512` holds the
//! intermediate product of two words so mul-div never loses precision.
#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer.
    pub struct U512(8);
}

impl U256 {
    /// Lossless widening into a 512-bit word
    #[inline]
    pub fn widen(self) -> U512 {
        let U256(ref limbs) = self;
        U512([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
    }

    /// Whether the value fits in `bits` bits
    #[inline]
    pub fn fits_in_bits(self, bits: usize) -> bool {
        self.bits() <= bits
    }
}

impl U512 {
    /// Narrow back into a 256-bit word, `None` if any high limb is set
    #[inline]
    pub fn narrow(self) -> Option<U256> {
        let U512(ref limbs) = self;
        if limbs[4..].iter().any(|&limb| limb != 0) {
            return None;
        }
        Some(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
    }
}

/// 256-bit signed integer, two's complement over a `U256` word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I256(U256);

impl I256 {
    pub const ZERO: I256 = I256(U256([0, 0, 0, 0]));
    pub const MIN: I256 = I256(U256([0, 0, 0, 1 << 63]));
    pub const MAX: I256 = I256(U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]));

    /// Reinterpret a raw two's complement word
    #[inline]
    pub const fn from_raw(word: U256) -> Self {
        I256(word)
    }

    #[inline]
    pub const fn into_raw(self) -> U256 {
        self.0
    }

    /// A non-negative value, `None` if it needs the sign bit
    #[inline]
    pub fn checked_from_unsigned(value: U256) -> Option<Self> {
        if value.bit(255) {
            None
        } else {
            Some(I256(value))
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.bit(255)
    }

    /// Magnitude as an unsigned word; `MIN` maps to 2^255
    #[inline]
    pub fn unsigned_abs(self) -> U256 {
        if self.is_negative() {
            self.wrapping_neg().0
        } else {
            self.0
        }
    }

    /// Negation modulo 2^256, `MIN` stays `MIN`
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        I256((!self.0).overflowing_add(U256::one()).0)
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        let magnitude = I256(U256::from(value.unsigned_abs()));
        if value < 0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}
