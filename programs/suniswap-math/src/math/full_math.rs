//! Full precision math operations
//!
//! Multiply-divide over 256-bit words with a 512-bit intermediate, so the
//! product never loses precision before the division.

use crate::big_num::{U256, U512};
use crate::errors::{MathError, Result};

/// Multiply two 256-bit numbers and divide by a third, with full precision
///
/// # Formula
/// result = floor(a * b / denominator)
///
/// # Returns
/// * `DivisionByZero` if denominator is zero
/// * `Overflow` if the quotient does not fit in 256 bits
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    let (quotient, _) = mul_div_mod(a, b, denominator)?;
    quotient.narrow().ok_or(MathError::Overflow)
}

/// Multiply two 256-bit numbers and divide by a third, rounding up
///
/// result = ceil(a * b / denominator); rounds up only on a nonzero remainder
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256> {
    let (quotient, remainder) = mul_div_mod(a, b, denominator)?;
    let quotient = if remainder.is_zero() {
        quotient
    } else {
        quotient + U512::one()
    };
    quotient.narrow().ok_or(MathError::Overflow)
}

/// ceil(x / y)
pub fn div_rounding_up(x: U256, y: U256) -> Result<U256> {
    if y.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = x.div_mod(y);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < x whenever there is a remainder, so this cannot wrap
        Ok(quotient + 1)
    }
}

/// Calculate (a * b) >> shift with full precision
pub fn mul_shr(a: U256, b: U256, shift: u32) -> Result<U256> {
    if shift >= 512 {
        return Ok(U256::zero());
    }
    let product = a.widen() * b.widen();
    (product >> shift).narrow().ok_or(MathError::Overflow)
}

/// 512-bit product divided by a 256-bit denominator
fn mul_div_mod(a: U256, b: U256, denominator: U256) -> Result<(U512, U512)> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    // (2^256 - 1)^2 < 2^512, the product never overflows
    let product = a.widen() * b.widen();
    Ok(product.div_mod(denominator.widen()))
}
