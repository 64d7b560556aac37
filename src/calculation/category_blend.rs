//! Day-weighted blending of a single score category.
//!
//! A staff member who worked at several locations in one week has a
//! separate set of category scores per location. Each category is
//! blended independently, weighting every location by its days worked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, LocationScoreBreakdown, ScoreCategory};

use super::rounding::round_half_up;

/// The blended value of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlendResult {
    /// The category that was blended.
    pub category: ScoreCategory,
    /// The exact day-weighted average before rounding.
    pub exact: Decimal,
    /// The average rounded half-up to a whole percentage.
    pub blended: u32,
    /// The audit step recording this blend.
    pub audit_step: AuditStep,
}

/// Sums the days worked across all breakdowns.
pub fn total_days_worked(breakdowns: &[LocationScoreBreakdown]) -> u64 {
    breakdowns.iter().map(|b| u64::from(b.days_worked)).sum()
}

/// Blends one category across location breakdowns, weighted by days worked.
///
/// `blended = Σ(days_worked × value) / Σ(days_worked)`, rounded half-up.
/// Breakdowns with zero days contribute nothing. The result does not
/// depend on the order of `breakdowns`.
///
/// # Errors
///
/// Returns [`EngineError::NoEligibleDays`] if the breakdowns record no
/// days worked at all (including an empty slice).
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::blend_category;
/// use groove_engine::models::{CategoryScores, LocationScoreBreakdown, ScoreCategory};
/// use rust_decimal::Decimal;
///
/// let at = |location: &str, days: u32, attendance: i64| LocationScoreBreakdown {
///     location_id: location.to_string(),
///     days_worked: days,
///     scores: CategoryScores {
///         attendance: Decimal::from(attendance),
///         punctuality: Decimal::from(100),
///         task_efficiency: Decimal::from(100),
///         customer_reviews: Decimal::from(100),
///     },
/// };
///
/// let breakdowns = vec![at("loc_north", 3, 100), at("loc_south", 2, 80)];
/// let result = blend_category(&breakdowns, ScoreCategory::Attendance, 1).unwrap();
/// assert_eq!(result.blended, 92);
/// ```
pub fn blend_category(
    breakdowns: &[LocationScoreBreakdown],
    category: ScoreCategory,
    step_number: u32,
) -> EngineResult<CategoryBlendResult> {
    let total_days = total_days_worked(breakdowns);
    if total_days == 0 {
        return Err(EngineError::NoEligibleDays);
    }

    let weighted_sum: Decimal = breakdowns
        .iter()
        .map(|b| Decimal::from(b.days_worked) * b.scores.get(category))
        .sum();
    let exact = weighted_sum / Decimal::from(total_days);
    let blended = round_half_up(exact);

    let terms: Vec<String> = breakdowns
        .iter()
        .map(|b| format!("{} x {}", b.days_worked, b.scores.get(category).normalize()))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "category_blend".to_string(),
        rule_name: "Day-Weighted Category Blend".to_string(),
        input: serde_json::json!({
            "category": category,
            "locations": breakdowns
                .iter()
                .map(|b| serde_json::json!({
                    "location_id": b.location_id,
                    "days_worked": b.days_worked,
                    "value": b.scores.get(category).normalize().to_string()
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "exact": exact.normalize().to_string(),
            "blended": blended
        }),
        reasoning: format!(
            "{}: ({}) / {} = {}, rounded to {}",
            category,
            terms.join(" + "),
            total_days,
            exact.round_dp(4).normalize(),
            blended
        ),
    };

    Ok(CategoryBlendResult {
        category,
        exact,
        blended,
        audit_step,
    })
}
