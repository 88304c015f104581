//! Sqrt Price Math
//!
//! Token amount deltas between two sqrt prices, and the next sqrt price
//! after a given amount of either token enters or leaves the pool.

use crate::big_num::U256;
use crate::constants::{MAX_UINT160, Q96, RESOLUTION};
use crate::errors::{MathError, Result};
use crate::math::full_math::{div_rounding_up, mul_div, mul_div_rounding_up};

/// Get the amount of token0 between two prices for a given liquidity
/// amount0 = liquidity * (sqrt_b - sqrt_a) / (sqrt_a * sqrt_b)
///
/// Rounds up for amounts the pool must collect, down for amounts it pays out.
pub fn get_amount0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    if sqrt_ratio_a_x96.is_zero() {
        return Err(MathError::PreconditionViolated("sqrt ratio must be positive"));
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?,
            sqrt_ratio_a_x96,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
    }
}

/// Get the amount of token1 between two prices for a given liquidity
/// amount1 = liquidity * (sqrt_b - sqrt_a)
pub fn get_amount1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    let diff = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        mul_div_rounding_up(U256::from(liquidity), diff, Q96)
    } else {
        mul_div(U256::from(liquidity), diff, Q96)
    }
}

/// Get the next sqrt price from an input amount
/// zero_for_one: token0 in, price goes down; otherwise token1 in, price goes up
pub fn get_next_sqrt_price_from_input(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256> {
    check_price_and_liquidity(sqrt_price_x96, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Get the next sqrt price from an output amount
/// zero_for_one: token1 out, price goes down; otherwise token0 out, price goes up
pub fn get_next_sqrt_price_from_output(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256> {
    check_price_and_liquidity(sqrt_price_x96, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price_x96, liquidity, amount_out, false)
    }
}

fn check_price_and_liquidity(sqrt_price_x96: U256, liquidity: u128) -> Result<()> {
    if sqrt_price_x96.is_zero() {
        tracing::debug!("next sqrt price requested from a zero price");
        return Err(MathError::PreconditionViolated("sqrt price must be positive"));
    }
    if liquidity == 0 {
        tracing::debug!(%sqrt_price_x96, "next sqrt price requested with zero liquidity");
        return Err(MathError::PreconditionViolated("liquidity must be positive"));
    }
    Ok(())
}

/// Next sqrt price after token0 is added (price down) or removed (price up)
///
/// new_sqrt_price = L * sqrt_price / (L +- amount * sqrt_price), rounded up.
/// The add path tries the exact formula first and falls back to
/// L / (L / sqrt_price + amount) when amount * sqrt_price wraps 256 bits.
fn get_next_sqrt_price_from_amount0_rounding_up(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256> {
    if amount.is_zero() {
        return Ok(sqrt_price_x96);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let (product, _) = amount.overflowing_mul(sqrt_price_x96);

    if add {
        if product / amount == sqrt_price_x96 {
            let (denominator, _) = numerator1.overflowing_add(product);
            if denominator >= numerator1 {
                return mul_div_rounding_up(numerator1, sqrt_price_x96, denominator);
            }
        }

        let denominator = (numerator1 / sqrt_price_x96)
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        div_rounding_up(numerator1, denominator)
    } else {
        if product / amount != sqrt_price_x96 {
            return Err(MathError::PreconditionViolated("amount * sqrt price overflows"));
        }
        if numerator1 <= product {
            return Err(MathError::PreconditionViolated("output exceeds token0 reserves"));
        }
        let denominator = numerator1 - product;
        to_sqrt_price(mul_div_rounding_up(numerator1, sqrt_price_x96, denominator)?)
    }
}

/// Next sqrt price after token1 is added (price up) or removed (price down)
///
/// new_sqrt_price = sqrt_price +- amount / L, rounded down.
fn get_next_sqrt_price_from_amount1_rounding_down(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256> {
    let liquidity = U256::from(liquidity);

    if add {
        let quotient = if amount <= MAX_UINT160 {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q96, liquidity)?
        };
        let next = sqrt_price_x96.checked_add(quotient).ok_or(MathError::Overflow)?;
        to_sqrt_price(next)
    } else {
        let quotient = mul_div_rounding_up(amount, Q96, liquidity)?;
        if sqrt_price_x96 <= quotient {
            return Err(MathError::PreconditionViolated("output exceeds token1 reserves"));
        }
        Ok(sqrt_price_x96 - quotient)
    }
}

/// A sqrt price is a 160-bit quantity
fn to_sqrt_price(value: U256) -> Result<U256> {
    if value > MAX_UINT160 {
        return Err(MathError::Overflow);
    }
    Ok(value)
}
