//! SuniSwap Math - Concentrated Liquidity Pricing Engine
//!
//! Bit-exact fixed-point arithmetic for a Uniswap V3 style concentrated
//! liquidity pool. Every value that the pool would store in a fixed-width
//! word is carried in a 256-bit integer with the same wraparound rules.
//!
//! ## Architecture
//!
//! - **Full-precision math**: 512-bit mul-div with floor or ceiling rounding
//! - **Tick math**: tick index to Q64.96 sqrt price and back
//! - **Sqrt price math**: token amounts between prices and price movement under trade
//! - **Swap step**: one monotonic segment of a swap, including the fee
//! - **Fee accounting**: fee growth inside a range and fees owed to a position
//!
//! ## Safety
//!
//! - All functions are pure and safe to call from any thread
//! - Failures are typed `MathError` values, never panics
//! - Wraparound is only ever explicit (`overflowing_*`), release builds keep overflow checks

pub mod big_num;
pub mod constants;
pub mod errors;
pub mod math;
pub mod utils;

pub use big_num::{I256, U256, U512};
pub use errors::{MathError, Result};
