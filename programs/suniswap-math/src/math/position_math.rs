//! Owed-fee computation for a liquidity position

use crate::big_num::U256;
use crate::errors::Result;
use crate::math::fee_growth::sub_in_256;
use crate::math::full_math::mul_shr;

/// Tokens accrued to a position since its last fee-growth snapshot
///
/// tokens = (fee_growth_delta * liquidity) >> 128, where the delta wraps
/// modulo 2^256.
pub fn get_tokens_owed(
    fee_growth_inside0_last_x128: U256,
    fee_growth_inside1_last_x128: U256,
    liquidity: u128,
    fee_growth_inside0_x128: U256,
    fee_growth_inside1_x128: U256,
) -> Result<(U256, U256)> {
    let fee_growth_delta0 = sub_in_256(fee_growth_inside0_x128, fee_growth_inside0_last_x128);
    let fee_growth_delta1 = sub_in_256(fee_growth_inside1_x128, fee_growth_inside1_last_x128);

    let tokens_owed0 = mul_shr(fee_growth_delta0, U256::from(liquidity), 128)?;
    let tokens_owed1 = mul_shr(fee_growth_delta1, U256::from(liquidity), 128)?;

    Ok((tokens_owed0, tokens_owed1))
}
