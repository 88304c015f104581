//! Tick Math
//!
//! Converts between tick indices and Q64.96 sqrt prices.
//!
//! tick = log_{1.0001}(price) = log(price) / log(1.0001)
//! sqrt_price = sqrt(1.0001^tick) = 1.0001^(tick/2)

use crate::big_num::{I256, U256};
use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q32};
use crate::errors::{MathError, Result};
use crate::math::bit_math::most_significant_bit;

/// sqrt(1.0001)^-1 in Q128.128, the starting ratio for odd ticks
const RATIO_ODD_TICK: U256 = U256([0xaa2d162d1a594001, 0xfffcb933bd6fad37, 0, 0]);

/// 1.0 in Q128.128
const RATIO_ONE: U256 = U256([0, 0, 1, 0]);

/// sqrt(1.0001)^-(2^k) in Q128.128 for k = 1..=19, keyed by the tick bit it covers
const RATIO_LADDER: [(u32, U256); 19] = [
    (0x2, U256([0x59a46990580e213a, 0xfff97272373d4132, 0, 0])),
    (0x4, U256([0xef12357cf3c7fdcc, 0xfff2e50f5f656932, 0, 0])),
    (0x8, U256([0x1c3624eaa0941cd0, 0xffe5caca7e10e4e6, 0, 0])),
    (0x10, U256([0xc9db58835c926644, 0xffcb9843d60f6159, 0, 0])),
    (0x20, U256([0x472e6896dfb254c0, 0xff973b41fa98c081, 0, 0])),
    (0x40, U256([0x43ec78b326b52861, 0xff2ea16466c96a38, 0, 0])),
    (0x80, U256([0x11c461f1969c3053, 0xfe5dee046a99a2a8, 0, 0])),
    (0x100, U256([0xdcffc83b479aa3a4, 0xfcbe86c7900a88ae, 0, 0])),
    (0x200, U256([0x6f2b074cf7815e54, 0xf987a7253ac41317, 0, 0])),
    (0x400, U256([0x940c7a398e4b70f3, 0xf3392b0822b70005, 0, 0])),
    (0x800, U256([0x43b29c7fa6e889d9, 0xe7159475a2c29b74, 0, 0])),
    (0x1000, U256([0x845ad8f792aa5825, 0xd097f3bdfd2022b8, 0, 0])),
    (0x2000, U256([0x8a65dc1f90e061e5, 0xa9f746462d870fdf, 0, 0])),
    (0x4000, U256([0x90bb3df62baf32f7, 0x70d869a156d2a1b8, 0, 0])),
    (0x8000, U256([0x81231505542fcfa6, 0x31be135f97d08fd9, 0, 0])),
    (0x10000, U256([0xc677de54f3e99bc9, 0x09aa508b5b7a84e1, 0, 0])),
    (0x20000, U256([0x6699c329225ee604, 0x005d6af8dedb8119, 0, 0])),
    (0x40000, U256([0x1ea926041bedfe98, 0x00002216e584f5fa, 0, 0])),
    (0x80000, U256([0x91f7dc42444e8fa2, 0x00000000048a1703, 0, 0])),
];

/// log2(sqrt(1.0001)) in Q128 = 255738958999603826347141
const LOG_SQRT_10001: U256 = U256([0xa301d71055774c85, 0x0000000000003627, 0, 0]);

/// Lower error bound of the log approximation = 3402992956809132418596140100660247210
const TICK_LOW_ERROR: U256 = U256([0x5af012a19d003aaa, 0x028f6481ab7f045a, 0, 0]);

/// Upper error bound of the log approximation = 291339464771989622907027621153398088495
const TICK_HIGH_ERROR: U256 = U256([0x455e260799a0632f, 0xdb2df09e81959a81, 0, 0]);

/// Get sqrt ratio at a given tick
/// sqrt_ratio_x96 = sqrt(1.0001^tick) * 2^96
///
/// Uses binary representation of tick to compute efficiently:
/// 1.0001^|tick| = product of 1.0001^(2^i) for each bit i set in |tick|
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        tracing::debug!(tick, "tick outside [MIN_TICK, MAX_TICK]");
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    // The ladder yields 1/sqrt(1.0001)^|tick| in Q128.128
    let mut ratio = if abs_tick & 0x1 != 0 {
        RATIO_ODD_TICK
    } else {
        RATIO_ONE
    };

    for (bit, multiplier) in RATIO_LADDER.iter() {
        if abs_tick & bit != 0 {
            ratio = mul_shift(ratio, *multiplier);
        }
    }

    // Positive ticks need the reciprocal
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Back to Q96, rounding up so get_tick_at_sqrt_ratio of the result is consistent
    let (quotient, remainder) = ratio.div_mod(Q32);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + 1)
    }
}

/// Get the greatest tick whose sqrt ratio is <= sqrt_ratio_x96
///
/// get_sqrt_ratio_at_tick(tick) <= sqrt_ratio_x96 < get_sqrt_ratio_at_tick(tick + 1)
pub fn get_tick_at_sqrt_ratio(sqrt_ratio_x96: U256) -> Result<i32> {
    if sqrt_ratio_x96 < MIN_SQRT_RATIO || sqrt_ratio_x96 >= MAX_SQRT_RATIO {
        tracing::debug!(%sqrt_ratio_x96, "sqrt ratio outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)");
        return Err(MathError::SqrtRatioOutOfRange);
    }

    let ratio_x128 = sqrt_ratio_x96 << 32;
    let msb = most_significant_bit(ratio_x128)?;

    // Normalize into [2^127, 2^128)
    let mut r = if msb >= 128 {
        ratio_x128 >> (msb - 127)
    } else {
        ratio_x128 << (127 - msb)
    };

    // Integer part of log2 in Q64.64, signed
    let mut log_2: i128 = (i128::from(msb) - 128) << 64;

    // Fractional part, one bit per squaring
    for i in 0..14u32 {
        r = (r * r) >> 127u32;
        let f = r >> 128u32;
        log_2 |= i128::from(f.low_u64() as u8) << (63 - i);
        r = r >> f;
    }

    // log_sqrt10001 = log_2 * log2(sqrt(1.0001)), a signed Q128.128 word
    let (log_sqrt10001, _) = I256::from(log_2).into_raw().overflowing_mul(LOG_SQRT_10001);

    let tick_low = low_i32(arithmetic_shr_128(
        log_sqrt10001.overflowing_sub(TICK_LOW_ERROR).0,
    ));
    let tick_high = low_i32(arithmetic_shr_128(
        log_sqrt10001.overflowing_add(TICK_HIGH_ERROR).0,
    ));

    if tick_low == tick_high {
        Ok(tick_low)
    } else if get_sqrt_ratio_at_tick(tick_high)? <= sqrt_ratio_x96 {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}

/// Check if a tick is in range and aligned to the given spacing
pub fn is_valid_tick(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && (MIN_TICK..=MAX_TICK).contains(&tick) && tick % tick_spacing == 0
}

/// Round a tick to the nearest multiple of `tick_spacing` that lies inside
/// [MIN_TICK, MAX_TICK]; ties round toward positive infinity
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::PreconditionViolated("tick spacing must be positive"));
    }
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    // floor((2 * tick + spacing) / (2 * spacing)) rounds half up
    let doubled = 2 * i64::from(tick) + i64::from(tick_spacing);
    let rounded = doubled.div_euclid(2 * i64::from(tick_spacing)) * i64::from(tick_spacing);

    let usable = if rounded < i64::from(MIN_TICK) {
        rounded + i64::from(tick_spacing)
    } else if rounded > i64::from(MAX_TICK) {
        rounded - i64::from(tick_spacing)
    } else {
        rounded
    };

    Ok(usable as i32)
}

/// Multiply two Q128.128 values and shift right by 128
/// Both operands are at most 2^128, so the product fits in 256 bits
#[inline]
fn mul_shift(value: U256, multiplier: U256) -> U256 {
    (value * multiplier) >> 128u32
}

/// Sign-filling right shift by 128 of a two's complement word
fn arithmetic_shr_128(word: U256) -> U256 {
    if word.bit(255) {
        !((!word) >> 128u32)
    } else {
        word >> 128u32
    }
}

/// Low 32 bits of a two's complement word whose value fits in an i32
fn low_i32(word: U256) -> i32 {
    word.low_u64() as u32 as i32
}
