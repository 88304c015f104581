//! Utility functions for building sqrt prices

use crate::big_num::U256;
use crate::errors::{MathError, Result};

/// Encode a reserve ratio as a Q64.96 sqrt price
/// sqrt_price_x96 = floor(sqrt(amount1 * 2^192 / amount0))
pub fn encode_sqrt_ratio_x96(amount1: U256, amount0: U256) -> Result<U256> {
    if amount0.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let ratio_x192 = (amount1.widen() << 192u32) / amount0.widen();
    // sqrt of a value below 2^448 fits in 224 bits
    ratio_x192
        .integer_sqrt()
        .narrow()
        .ok_or(MathError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(amount1: u64, amount0: u64) -> U256 {
        encode_sqrt_ratio_x96(U256::from(amount1), U256::from(amount0)).unwrap()
    }

    #[test]
    fn test_encode_one_to_one() {
        assert_eq!(encode(1, 1), U256::one() << 96);
    }

    #[test]
    fn test_encode_vectors() {
        let cases = [
            (100, 1, "792281625142643375935439503360"),
            (1, 100, "7922816251426433759354395033"),
            (111, 333, "45742400955009932534161870629"),
            (333, 111, "137227202865029797602485611888"),
        ];
        for (amount1, amount0, expected) in cases {
            assert_eq!(
                encode(amount1, amount0),
                U256::from_dec_str(expected).unwrap(),
                "encode({amount1}, {amount0})"
            );
        }
    }

    #[test]
    fn test_encode_zero_denominator() {
        assert_eq!(
            encode_sqrt_ratio_x96(U256::one(), U256::zero()),
            Err(MathError::DivisionByZero)
        );
    }
}
