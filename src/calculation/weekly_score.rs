//! Weekly Groove Score aggregation.
//!
//! This module combines per-location category scores into the single
//! weighted weekly score shown on a staff member's dashboard.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, LocationScoreBreakdown, ScoreCalculationResult, ScoreCategory,
    ScoreWeights, WeeklyScore,
};

use super::category_blend::{blend_category, total_days_worked};
use super::rounding::round_half_up;
use super::weight_validation::validate_weights;

/// Computes a staff member's weekly score.
///
/// See [`aggregate_with_audit`] for the rules applied; this returns only
/// the score.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::aggregate;
/// use groove_engine::models::{CategoryScores, LocationScoreBreakdown, ScoreWeights};
/// use rust_decimal::Decimal;
///
/// let scores = |a: i64, p: i64, t: i64, c: i64| CategoryScores {
///     attendance: Decimal::from(a),
///     punctuality: Decimal::from(p),
///     task_efficiency: Decimal::from(t),
///     customer_reviews: Decimal::from(c),
/// };
/// let breakdowns = vec![
///     LocationScoreBreakdown { location_id: "loc_north".into(), days_worked: 3, scores: scores(100, 75, 80, 90) },
///     LocationScoreBreakdown { location_id: "loc_south".into(), days_worked: 2, scores: scores(80, 85, 70, 100) },
/// ];
///
/// let score = aggregate(&breakdowns, &ScoreWeights::default()).unwrap();
/// assert_eq!((score.attendance, score.punctuality, score.task_efficiency, score.customer_reviews), (92, 79, 76, 94));
/// assert_eq!(score.total_score, 85);
/// ```
pub fn aggregate(
    breakdowns: &[LocationScoreBreakdown],
    weights: &ScoreWeights,
) -> EngineResult<WeeklyScore> {
    aggregate_with_audit(breakdowns, weights).map(|result| result.score)
}

/// Computes a staff member's weekly score and the audit trace behind it.
///
/// The rules run in order:
///
/// 1. The weights must sum to 100.
/// 2. Every category value must lie in `[0, 100]`.
/// 3. At least one day must have been worked across all locations.
/// 4. Each category is blended across locations, weighted by days worked,
///    and rounded half-up to a whole percentage.
/// 5. The total is `Σ(weight / 100 × blended)` over the rounded category
///    values, rounded half-up.
///
/// Locations listed with zero days worked are kept but carry no weight;
/// each one adds a `ZERO_DAYS_WORKED` warning to the trace.
///
/// # Errors
///
/// - [`EngineError::InvalidWeightConfig`] if the weights do not sum to 100.
/// - [`EngineError::InvalidBreakdown`] if a category value is outside `[0, 100]`.
/// - [`EngineError::NoEligibleDays`] if no days were worked. Callers should
///   mark the week as not eligible rather than show a score of 0.
pub fn aggregate_with_audit(
    breakdowns: &[LocationScoreBreakdown],
    weights: &ScoreWeights,
) -> EngineResult<ScoreCalculationResult> {
    let mut trace = AuditTrace::default();

    let weight_step = validate_weights(weights, trace.next_step_number())?;
    trace.steps.push(weight_step);

    for breakdown in breakdowns {
        validate_breakdown(breakdown)?;
    }

    let total_days = total_days_worked(breakdowns);
    if total_days == 0 {
        return Err(EngineError::NoEligibleDays);
    }
    trace.push_step(
        "eligible_days",
        "Eligible Days Check",
        serde_json::json!({
            "locations": breakdowns
                .iter()
                .map(|b| serde_json::json!({
                    "location_id": b.location_id,
                    "days_worked": b.days_worked
                }))
                .collect::<Vec<_>>()
        }),
        serde_json::json!({ "total_days_worked": total_days }),
        format!(
            "{} days worked across {} location(s); week is eligible for scoring",
            total_days,
            breakdowns.len()
        ),
    );

    for breakdown in breakdowns.iter().filter(|b| b.days_worked == 0) {
        trace.warnings.push(AuditWarning {
            code: "ZERO_DAYS_WORKED".to_string(),
            message: format!(
                "Location '{}' has no days worked and does not affect the score",
                breakdown.location_id
            ),
            severity: "low".to_string(),
        });
    }

    let mut blended = [0u32; 4];
    for (slot, category) in blended.iter_mut().zip(ScoreCategory::ALL) {
        let result = blend_category(breakdowns, category, trace.next_step_number())?;
        *slot = result.blended;
        trace.steps.push(result.audit_step);
    }
    let [attendance, punctuality, task_efficiency, customer_reviews] = blended;
    let mut score = WeeklyScore {
        attendance,
        punctuality,
        task_efficiency,
        customer_reviews,
        total_score: 0,
        total_days_worked: u32::try_from(total_days).unwrap_or(u32::MAX),
        location_count: breakdowns.len(),
    };

    let weighted_total: Decimal = ScoreCategory::ALL
        .iter()
        .map(|category| {
            Decimal::from(weights.get(*category)) * Decimal::from(score.category(*category))
        })
        .sum::<Decimal>()
        / Decimal::ONE_HUNDRED;
    score.total_score = round_half_up(weighted_total);

    let mut input = serde_json::Map::new();
    let mut terms = Vec::with_capacity(ScoreCategory::ALL.len());
    for category in ScoreCategory::ALL {
        input.insert(category.to_string(), serde_json::json!(score.category(category)));
        terms.push(format!("{}% x {}", weights.get(category), score.category(category)));
    }
    input.insert("weights".to_string(), serde_json::json!(weights));
    trace.push_step(
        "weighted_total",
        "Weighted Groove Score",
        serde_json::Value::Object(input),
        serde_json::json!({
            "exact": weighted_total.normalize().to_string(),
            "total_score": score.total_score
        }),
        format!(
            "{} = {}, rounded to {}",
            terms.join(" + "),
            weighted_total.normalize(),
            score.total_score
        ),
    );

    Ok(ScoreCalculationResult {
        score,
        audit_trace: trace,
    })
}

fn validate_breakdown(breakdown: &LocationScoreBreakdown) -> EngineResult<()> {
    for category in ScoreCategory::ALL {
        let value = breakdown.scores.get(category);
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(EngineError::score_out_of_range(
                &breakdown.location_id,
                &category.to_string(),
                value,
            ));
        }
    }
    Ok(())
}
