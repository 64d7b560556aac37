//! Percentage rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a percentage to the nearest whole number, halves rounding up.
///
/// Inputs are non-negative percentages, so "away from zero" and "half up"
/// agree. A negative input saturates to 0.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(843, 1)), 84); // 84.3
/// assert_eq!(round_half_up(Decimal::new(845, 1)), 85); // 84.5
/// assert_eq!(round_half_up(Decimal::new(8449, 2)), 84); // 84.49
/// ```
pub fn round_half_up(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
