//! Fee growth accounting across tick boundaries
//!
//! Accumulators are stored modulo 2^256. Only differences between two
//! snapshots are meaningful, so every subtraction here wraps.

use crate::big_num::U256;

/// Fee growth recorded on the other side of an initialized tick (Q128.128)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeGrowthOutside {
    pub fee_growth_outside0_x128: U256,
    pub fee_growth_outside1_x128: U256,
}

impl FeeGrowthOutside {
    pub fn new(fee_growth_outside0_x128: U256, fee_growth_outside1_x128: U256) -> Self {
        Self {
            fee_growth_outside0_x128,
            fee_growth_outside1_x128,
        }
    }

    /// Flip the snapshot when the price crosses the tick
    pub fn cross(&mut self, fee_growth_global0_x128: U256, fee_growth_global1_x128: U256) {
        self.fee_growth_outside0_x128 =
            sub_in_256(fee_growth_global0_x128, self.fee_growth_outside0_x128);
        self.fee_growth_outside1_x128 =
            sub_in_256(fee_growth_global1_x128, self.fee_growth_outside1_x128);
    }
}

/// x - y modulo 2^256
#[inline]
pub fn sub_in_256(x: U256, y: U256) -> U256 {
    x.overflowing_sub(y).0
}

/// Calculate fee growth inside a tick range
///
/// Returns the growth per unit of liquidity accrued strictly between
/// `tick_lower` and `tick_upper`, for token0 and token1.
pub fn get_fee_growth_inside(
    lower: &FeeGrowthOutside,
    upper: &FeeGrowthOutside,
    tick_lower: i32,
    tick_upper: i32,
    tick_current: i32,
    fee_growth_global0_x128: U256,
    fee_growth_global1_x128: U256,
) -> (U256, U256) {
    // Calculate fee growth below lower tick
    let (fee_growth_below0, fee_growth_below1) = if tick_current >= tick_lower {
        (lower.fee_growth_outside0_x128, lower.fee_growth_outside1_x128)
    } else {
        (
            sub_in_256(fee_growth_global0_x128, lower.fee_growth_outside0_x128),
            sub_in_256(fee_growth_global1_x128, lower.fee_growth_outside1_x128),
        )
    };

    // Calculate fee growth above upper tick
    let (fee_growth_above0, fee_growth_above1) = if tick_current < tick_upper {
        (upper.fee_growth_outside0_x128, upper.fee_growth_outside1_x128)
    } else {
        (
            sub_in_256(fee_growth_global0_x128, upper.fee_growth_outside0_x128),
            sub_in_256(fee_growth_global1_x128, upper.fee_growth_outside1_x128),
        )
    };

    (
        sub_in_256(
            sub_in_256(fee_growth_global0_x128, fee_growth_below0),
            fee_growth_above0,
        ),
        sub_in_256(
            sub_in_256(fee_growth_global1_x128, fee_growth_below1),
            fee_growth_above1,
        ),
    )
}
