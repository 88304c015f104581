//! Liquidity Math
//!
//! Signed liquidity deltas and conversions between liquidity and token amounts.

use crate::big_num::U256;
use crate::constants::Q96;
use crate::errors::{MathError, Result};
use crate::math::full_math::mul_div;
use crate::math::sqrt_price_math::{get_amount0_delta, get_amount1_delta};

/// Add a signed liquidity delta to existing liquidity
///
/// x - |y| when y is negative, x + y otherwise. Removing more liquidity than
/// exists is the caller's contract to avoid; it cannot be represented and fails.
pub fn add_delta(x: u128, y: i128) -> Result<u128> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs())
            .ok_or(MathError::PreconditionViolated("liquidity delta exceeds liquidity"))
    } else {
        x.checked_add(y as u128).ok_or(MathError::Overflow)
    }
}

fn sort(sqrt_ratio_a_x96: U256, sqrt_ratio_b_x96: U256) -> (U256, U256) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

fn to_liquidity(value: U256) -> Result<u128> {
    if !value.fits_in_bits(128) {
        return Err(MathError::Overflow);
    }
    Ok(value.low_u128())
}

/// Largest liquidity a given amount of token0 supports over [a, b]
///
/// L = amount0 * sqrt_a * sqrt_b / (Q96 * (sqrt_b - sqrt_a)), computed without
/// intermediate truncation
pub fn get_liquidity_for_amount0(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> Result<u128> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let numerator = (sqrt_ratio_lower.widen() * sqrt_ratio_upper.widen())
        .checked_mul(amount0.widen())
        .ok_or(MathError::Overflow)?;
    let denominator = Q96.widen() * (sqrt_ratio_upper - sqrt_ratio_lower).widen();
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let liquidity = (numerator / denominator).narrow().ok_or(MathError::Overflow)?;
    to_liquidity(liquidity)
}

/// Largest liquidity a given amount of token1 supports over [a, b]
///
/// L = amount1 * Q96 / (sqrt_b - sqrt_a)
pub fn get_liquidity_for_amount1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: U256,
) -> Result<u128> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    let liquidity = mul_div(amount1, Q96, sqrt_ratio_upper - sqrt_ratio_lower)?;
    to_liquidity(liquidity)
}

/// Calculate the maximum liquidity that can be added with the given amounts
/// for a position in the range [sqrt_ratio_a, sqrt_ratio_b] at the current price
pub fn max_liquidity_for_amounts(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
    amount1: U256,
) -> Result<u128> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_current_x96 <= sqrt_ratio_lower {
        // Below range, only token0 is needed
        get_liquidity_for_amount0(sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_current_x96 < sqrt_ratio_upper {
        let liquidity0 =
            get_liquidity_for_amount0(sqrt_ratio_current_x96, sqrt_ratio_upper, amount0)?;
        let liquidity1 =
            get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_current_x96, amount1)?;
        // The scarcer side bounds what can actually be deposited
        Ok(liquidity0.min(liquidity1))
    } else {
        // Above range, only token1 is needed
        get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// Calculate the token amounts represented by `liquidity`
/// at the current price for a position in range [a, b]
pub fn get_amounts_for_liquidity(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<(U256, U256)> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_current_x96 <= sqrt_ratio_lower {
        let amount0 =
            get_amount0_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up)?;
        Ok((amount0, U256::zero()))
    } else if sqrt_ratio_current_x96 < sqrt_ratio_upper {
        let amount0 =
            get_amount0_delta(sqrt_ratio_current_x96, sqrt_ratio_upper, liquidity, round_up)?;
        let amount1 =
            get_amount1_delta(sqrt_ratio_lower, sqrt_ratio_current_x96, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        let amount1 =
            get_amount1_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up)?;
        Ok((U256::zero(), amount1))
    }
}
