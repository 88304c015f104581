// SuniSwap Math Constants
// Values match the Uniswap V3 core contracts bit for bit

use crate::big_num::U256;

/// Minimum tick index (p(i) = 1.0001^i, the smallest price representable in Q64.96)
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = -MIN_TICK;

/// Sqrt ratio at MIN_TICK (Q64.96 format)
/// 4295128739
pub const MIN_SQRT_RATIO: U256 = U256([0x00000001000276a3, 0, 0, 0]);

/// Sqrt ratio at MAX_TICK (Q64.96 format), exclusive upper bound
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: U256 = U256([
    0x5d951d5263988d26,
    0xefd1fc6a50648849,
    0x00000000fffd8963,
    0,
]);

/// Fee denominator in pips (1_000_000 = 100%)
pub const MAX_FEE: u32 = 1_000_000;

/// Q32 multiplier (2^32), the gap between Q128 and Q96
pub const Q32: U256 = U256([1 << 32, 0, 0, 0]);

/// Q96 multiplier (2^96)
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// Q128 multiplier (2^128) for fee growth calculations
pub const Q128: U256 = U256([0, 0, 1, 0]);

/// Number of fractional bits of a sqrt price
pub const RESOLUTION: u32 = 96;

/// 2^160 - 1, the largest value a sqrt price may hold
pub const MAX_UINT160: U256 = U256([u64::MAX, u64::MAX, 0x00000000ffffffff, 0]);

/// Standard fee tiers and their tick spacings
pub mod fee_tiers {
    /// 0.01% fee (tick spacing 1) - for very stable pairs
    pub const FEE_TIER_100: u32 = 100;
    pub const TICK_SPACING_100: i32 = 1;

    /// 0.05% fee (tick spacing 10) - for stable pairs
    pub const FEE_TIER_500: u32 = 500;
    pub const TICK_SPACING_500: i32 = 10;

    /// 0.30% fee (tick spacing 60) - for most pairs
    pub const FEE_TIER_3000: u32 = 3000;
    pub const TICK_SPACING_3000: i32 = 60;

    /// 1.00% fee (tick spacing 200) - for exotic pairs
    pub const FEE_TIER_10000: u32 = 10000;
    pub const TICK_SPACING_10000: i32 = 200;
}

/// Standard fee amounts in pips
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FeeAmount {
    Lowest = fee_tiers::FEE_TIER_100,
    Low = fee_tiers::FEE_TIER_500,
    Medium = fee_tiers::FEE_TIER_3000,
    High = fee_tiers::FEE_TIER_10000,
}

impl FeeAmount {
    /// Fee in pips
    pub const fn pips(self) -> u32 {
        self as u32
    }

    /// Tick spacing paired with this fee tier
    pub const fn tick_spacing(self) -> i32 {
        match self {
            FeeAmount::Lowest => fee_tiers::TICK_SPACING_100,
            FeeAmount::Low => fee_tiers::TICK_SPACING_500,
            FeeAmount::Medium => fee_tiers::TICK_SPACING_3000,
            FeeAmount::High => fee_tiers::TICK_SPACING_10000,
        }
    }

    /// Look up the tier for a raw pip value
    pub fn from_pips(pips: u32) -> Option<Self> {
        match pips {
            fee_tiers::FEE_TIER_100 => Some(FeeAmount::Lowest),
            fee_tiers::FEE_TIER_500 => Some(FeeAmount::Low),
            fee_tiers::FEE_TIER_3000 => Some(FeeAmount::Medium),
            fee_tiers::FEE_TIER_10000 => Some(FeeAmount::High),
            _ => None,
        }
    }
}
