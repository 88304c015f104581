//! Swap Math
//!
//! Core swap computation logic: one monotonic price segment of a swap.

use crate::big_num::{I256, U256};
use crate::constants::{MAX_FEE, Q128};
use crate::errors::{MathError, Result};
use crate::math::full_math::{mul_div, mul_div_rounding_up};
use crate::math::sqrt_price_math::{
    get_amount0_delta, get_amount1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};

/// Result of a single swap step computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStepResult {
    /// The new sqrt price after the swap step
    pub sqrt_ratio_next_x96: U256,
    /// Amount of input token consumed, excluding fee
    pub amount_in: U256,
    /// Amount of output token produced
    pub amount_out: U256,
    /// Fee amount collected, in the input token
    pub fee_amount: U256,
}

/// Compute the result of a single swap step
///
/// # Arguments
/// * `sqrt_ratio_current_x96` - Current sqrt price (Q64.96)
/// * `sqrt_ratio_target_x96` - Price that cannot be exceeded (next tick or price limit)
/// * `liquidity` - Usable liquidity
/// * `amount_remaining` - Signed 256-bit amount. Non-negative: exact input remaining. Negative: exact output remaining
/// * `fee_pips` - Fee in hundredths of a bip (3000 = 0.3%)
///
/// Direction follows from the prices: current >= target swaps token0 for token1.
pub fn compute_swap_step(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_target_x96: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<SwapStepResult> {
    if fee_pips >= MAX_FEE {
        tracing::debug!(fee_pips, "fee must be below MAX_FEE");
        return Err(MathError::PreconditionViolated("fee pips must be below MAX_FEE"));
    }

    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_in = !amount_remaining.is_negative();
    let amount_remaining_abs = amount_remaining.unsigned_abs();

    let sqrt_ratio_next_x96: U256;
    // Amount computed toward the target; reused when the target is reached in the same mode
    let mut amount_in = U256::zero();
    let mut amount_out = U256::zero();

    if exact_in {
        let amount_remaining_less_fee = mul_div(
            amount_remaining_abs,
            U256::from(MAX_FEE - fee_pips),
            U256::from(MAX_FEE),
        )?;

        amount_in = if zero_for_one {
            get_amount0_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, true)?
        } else {
            get_amount1_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, true)?
        };

        sqrt_ratio_next_x96 = if amount_remaining_less_fee >= amount_in {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_input(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        };
    } else {
        amount_out = if zero_for_one {
            get_amount1_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, false)?
        } else {
            get_amount0_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, false)?
        };

        sqrt_ratio_next_x96 = if amount_remaining_abs >= amount_out {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_output(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )?
        };
    }

    let max = sqrt_ratio_target_x96 == sqrt_ratio_next_x96;

    // Recompute between current and next price unless the target was hit in the same mode
    if zero_for_one {
        if !(max && exact_in) {
            amount_in =
                get_amount0_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out =
                get_amount1_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, false)?;
        }
    } else {
        if !(max && exact_in) {
            amount_in =
                get_amount1_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out =
                get_amount0_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, false)?;
        }
    }

    // Rounding slack must never pay out more than was asked for
    if !exact_in && amount_out > amount_remaining_abs {
        amount_out = amount_remaining_abs;
    }

    let fee_amount = if exact_in && sqrt_ratio_next_x96 != sqrt_ratio_target_x96 {
        // Target not reached: the whole remainder is taken as fee
        amount_remaining_abs.overflowing_sub(amount_in).0
    } else {
        mul_div_rounding_up(
            amount_in,
            U256::from(fee_pips),
            U256::from(MAX_FEE - fee_pips),
        )?
    };

    tracing::trace!(
        %sqrt_ratio_current_x96,
        %sqrt_ratio_target_x96,
        %sqrt_ratio_next_x96,
        %amount_in,
        %amount_out,
        %fee_amount,
        "computed swap step"
    );

    Ok(SwapStepResult {
        sqrt_ratio_next_x96,
        amount_in,
        amount_out,
        fee_amount,
    })
}

/// Calculate fee growth per unit of liquidity
/// fee_growth = fee_amount * 2^128 / liquidity
///
/// Returns 0 when there is no liquidity to credit.
pub fn fee_growth_delta_x128(fee_amount: U256, liquidity: u128) -> Result<U256> {
    if liquidity == 0 || fee_amount.is_zero() {
        return Ok(U256::zero());
    }
    mul_div(fee_amount, Q128, U256::from(liquidity))
}
