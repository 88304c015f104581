// End-to-end vectors through the public surface
// Run with: cargo test -p suniswap-math --test test_vectors

use suniswap_math::constants::*;
use suniswap_math::math::*;
use suniswap_math::utils::encode_sqrt_ratio_x96;
use suniswap_math::{MathError, I256, U256, U512};

const E18: u128 = 1_000_000_000_000_000_000;

/// Liquidity minted by 1e18 of each token into [-60, 60] at price 1
const POSITION_LIQUIDITY: u128 = 333850249709699449134;

fn dec(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

// ============================================================
// CONSTANT CONTRACT
// ============================================================

#[test]
fn test_bounds_are_consistent() {
    assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
    assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
    assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO).unwrap(), MIN_TICK);
    assert_eq!(get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - 1).unwrap(), MAX_TICK - 1);
    assert_eq!(MIN_SQRT_RATIO, U256::from(4295128739u64));
    assert_eq!(
        MAX_SQRT_RATIO,
        dec("1461446703485210103287273052203988822378723970342")
    );
    assert_eq!(MAX_FEE, 1_000_000);
}

#[test]
fn test_out_of_range_inputs() {
    assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK - 1), Err(MathError::TickOutOfRange));
    assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK + 1), Err(MathError::TickOutOfRange));
    assert_eq!(
        get_tick_at_sqrt_ratio(MIN_SQRT_RATIO - 1),
        Err(MathError::SqrtRatioOutOfRange)
    );
    assert_eq!(get_tick_at_sqrt_ratio(MAX_SQRT_RATIO), Err(MathError::SqrtRatioOutOfRange));
}

#[test]
fn test_most_significant_bit_powers_of_two() {
    for i in 1..=255u8 {
        assert_eq!(most_significant_bit(U256::one() << i).unwrap(), i);
    }
    for i in 2..=255u8 {
        assert_eq!(most_significant_bit((U256::one() << i) - 1).unwrap(), i - 1);
    }
    assert_eq!(most_significant_bit(U256::MAX).unwrap(), 255);
    assert_eq!(most_significant_bit(U256::zero()), Err(MathError::ZeroInput));
    assert_eq!(
        most_significant_bit_wide(U256::MAX.widen() + U512::one()),
        Err(MathError::Overflow)
    );
}

// ============================================================
// POSITION LIFECYCLE
// ============================================================

#[test]
fn test_position_liquidity_for_amounts() {
    let price = encode_sqrt_ratio_x96(U256::one(), U256::one()).unwrap();
    let lower = get_sqrt_ratio_at_tick(-60).unwrap();
    let upper = get_sqrt_ratio_at_tick(60).unwrap();

    assert_eq!(lower, dec("78990846045029531151608375686"));
    assert_eq!(upper, dec("79466191966197645195421774833"));

    let liquidity =
        max_liquidity_for_amounts(price, lower, upper, U256::from(E18), U256::from(E18)).unwrap();
    assert_eq!(liquidity, POSITION_LIQUIDITY);

    // depositing rounds up, withdrawing rounds down
    let deposit = get_amounts_for_liquidity(price, lower, upper, liquidity, true).unwrap();
    assert_eq!(deposit, (U256::from(E18), U256::from(E18)));
    let withdraw = get_amounts_for_liquidity(price, lower, upper, liquidity, false).unwrap();
    assert_eq!(withdraw, (U256::from(E18 - 1), U256::from(E18 - 1)));
}

#[test]
fn test_swap_inside_range_accrues_fees() {
    let price = U256::one() << 96;
    let lower = get_sqrt_ratio_at_tick(-60).unwrap();

    let step = compute_swap_step(
        price,
        lower,
        POSITION_LIQUIDITY,
        I256::from(1_000_000_000_000_000i128),
        FeeAmount::Medium.pips(),
    )
    .unwrap();

    assert_eq!(step.sqrt_ratio_next_x96, dec("79227925910451096758885928005"));
    assert_eq!(step.amount_in, U256::from(997_000_000_000_000u64));
    assert_eq!(step.amount_out, U256::from(996_997_022_599_107u64));
    assert_eq!(step.fee_amount, U256::from(3_000_000_000_000u64));
    assert_eq!(get_tick_at_sqrt_ratio(step.sqrt_ratio_next_x96).unwrap(), -1);

    let fee_growth_global0 = fee_growth_delta_x128(step.fee_amount, POSITION_LIQUIDITY).unwrap();
    assert_eq!(fee_growth_global0, dec("3057799422497051439017207650144"));

    let outside = FeeGrowthOutside::default();
    let (inside0, inside1) =
        get_fee_growth_inside(&outside, &outside, -60, 60, -1, fee_growth_global0, U256::zero());
    assert_eq!(inside0, fee_growth_global0);
    assert_eq!(inside1, U256::zero());

    let (owed0, owed1) =
        get_tokens_owed(U256::zero(), U256::zero(), POSITION_LIQUIDITY, inside0, inside1).unwrap();
    // one unit is lost to flooring the growth per unit of liquidity
    assert_eq!(owed0, U256::from(2_999_999_999_999u64));
    assert_eq!(owed1, U256::zero());
}

#[test]
fn test_swap_through_lower_tick_freezes_position_fees() {
    let price = U256::one() << 96;
    let lower = get_sqrt_ratio_at_tick(-60).unwrap();

    // enough input to drain the range
    let first = compute_swap_step(
        price,
        lower,
        POSITION_LIQUIDITY,
        I256::from(1_000_000_000_000_000_000_000i128),
        FeeAmount::Medium.pips(),
    )
    .unwrap();
    assert_eq!(first.sqrt_ratio_next_x96, lower);
    assert_eq!(first.amount_in, dec("1003004354062741926"));
    assert_eq!(first.amount_out, U256::from(E18 - 1));
    assert_eq!(first.fee_amount, U256::from(3_018_067_263_980_167u64));

    let mut fee_growth_global0 =
        fee_growth_delta_x128(first.fee_amount, POSITION_LIQUIDITY).unwrap();
    assert_eq!(fee_growth_global0, dec("3076214778951936916225180906800737"));

    // crossing the lower tick moving down leaves the price just below it
    let mut lower_outside = FeeGrowthOutside::default();
    let upper_outside = FeeGrowthOutside::default();
    lower_outside.cross(fee_growth_global0, U256::zero());
    assert_eq!(lower_outside.fee_growth_outside0_x128, fee_growth_global0);
    let tick_current = get_tick_at_sqrt_ratio(lower - 1).unwrap();
    assert_eq!(tick_current, -61);

    // liquidity from another range keeps trading below the position
    let second = compute_swap_step(
        lower,
        get_sqrt_ratio_at_tick(-120).unwrap(),
        POSITION_LIQUIDITY,
        I256::from(1_000_000_000_000_000i128),
        FeeAmount::Medium.pips(),
    )
    .unwrap();
    assert_eq!(second.sqrt_ratio_next_x96, dec("78990610856516150450021783203"));
    assert_eq!(second.fee_amount, U256::from(3_000_000_000_000u64));

    fee_growth_global0 += fee_growth_delta_x128(second.fee_amount, POSITION_LIQUIDITY).unwrap();
    assert_eq!(fee_growth_global0, dec("3079272578374433967664198114450881"));

    let (inside0, _) = get_fee_growth_inside(
        &lower_outside,
        &upper_outside,
        -60,
        60,
        tick_current,
        fee_growth_global0,
        U256::zero(),
    );
    assert_eq!(inside0, dec("3076214778951936916225180906800737"));

    let (owed0, _) =
        get_tokens_owed(U256::zero(), U256::zero(), POSITION_LIQUIDITY, inside0, U256::zero())
            .unwrap();
    assert_eq!(owed0, U256::from(3_018_067_263_980_166u64));
}

#[test]
fn test_exact_output_swap_upward() {
    let price = U256::one() << 96;
    let upper = get_sqrt_ratio_at_tick(60).unwrap();

    let step = compute_swap_step(
        price,
        upper,
        E18,
        I256::from(-1_000_000_000_000_000i128),
        FeeAmount::Low.pips(),
    )
    .unwrap();

    assert_eq!(step.sqrt_ratio_next_x96, dec("79307469984248586179723674011"));
    assert_eq!(step.amount_in, U256::from(1_001_001_001_001_002u64));
    assert_eq!(step.amount_out, U256::from(1_000_000_000_000_000u64));
    assert_eq!(step.fee_amount, U256::from(500_750_875_939u64));
    assert_eq!(get_tick_at_sqrt_ratio(step.sqrt_ratio_next_x96).unwrap(), 20);
}

// ============================================================
// FEE TIERS
// ============================================================

#[test]
fn test_fee_tier_usable_ticks() {
    for tier in [FeeAmount::Lowest, FeeAmount::Low, FeeAmount::Medium, FeeAmount::High] {
        let spacing = tier.tick_spacing();
        let min_usable = nearest_usable_tick(MIN_TICK, spacing).unwrap();
        let max_usable = nearest_usable_tick(MAX_TICK, spacing).unwrap();
        assert!(min_usable >= MIN_TICK);
        assert!(max_usable <= MAX_TICK);
        assert_eq!(min_usable, -max_usable);
        assert!(is_valid_tick(min_usable, spacing));
        assert!(get_sqrt_ratio_at_tick(max_usable).is_ok());
    }
}
