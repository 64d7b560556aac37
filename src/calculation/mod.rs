//! Calculation logic for the Groove Engine.
//!
//! This module contains the two pure calculators of the engine: recurring
//! shift expansion (rule validation, month stepping, instance generation)
//! and weekly Groove Score aggregation (weight validation, day-weighted
//! category blending, half-up rounding, the weighted total).

mod category_blend;
mod month_arithmetic;
mod recurrence_expansion;
mod rounding;
mod rule_validation;
mod weekly_score;
mod weight_validation;

pub use category_blend::{CategoryBlendResult, blend_category, total_days_worked};
pub use month_arithmetic::add_months_clamped;
pub use recurrence_expansion::expand;
pub use rounding::round_half_up;
pub use rule_validation::{MAX_OCCURRENCES, ValidatedRule, WeekdayMask, validate_rule};
pub use weekly_score::{aggregate, aggregate_with_audit};
pub use weight_validation::{REQUIRED_WEIGHT_TOTAL, validate_weights};
