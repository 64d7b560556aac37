//! Category weight validation.
//!
//! The settings screen only lets a manager save weights that sum to 100.
//! The same check runs here so a misconfigured weighting can never reach
//! a score.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ScoreWeights};

/// The sum every valid weighting must reach.
pub const REQUIRED_WEIGHT_TOTAL: u64 = 100;

/// Checks that the category weights sum to exactly 100.
///
/// # Arguments
///
/// * `weights` - The category weights to check
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// The audit step recording the check on success.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWeightConfig`] carrying the actual total
/// when the weights do not sum to 100.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::validate_weights;
/// use groove_engine::models::ScoreWeights;
///
/// assert!(validate_weights(&ScoreWeights::default(), 1).is_ok());
///
/// let lopsided = ScoreWeights { attendance: 40, ..ScoreWeights::default() };
/// assert!(validate_weights(&lopsided, 1).is_err());
/// ```
pub fn validate_weights(weights: &ScoreWeights, step_number: u32) -> EngineResult<AuditStep> {
    let total = weights.total();
    if total != REQUIRED_WEIGHT_TOTAL {
        return Err(EngineError::InvalidWeightConfig { total });
    }

    Ok(AuditStep {
        step_number,
        rule_id: "weight_validation".to_string(),
        rule_name: "Category Weight Validation".to_string(),
        input: serde_json::json!({
            "attendance": weights.attendance,
            "punctuality": weights.punctuality,
            "task_efficiency": weights.task_efficiency,
            "customer_reviews": weights.customer_reviews
        }),
        output: serde_json::json!({ "total": total }),
        reasoning: format!(
            "Weights {} + {} + {} + {} sum to {}",
            weights.attendance,
            weights.punctuality,
            weights.task_efficiency,
            weights.customer_reviews,
            total
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(a: u32, p: u32, t: u32, c: u32) -> ScoreWeights {
        ScoreWeights {
            attendance: a,
            punctuality: p,
            task_efficiency: t,
            customer_reviews: c,
        }
    }

    // ==========================================================================
    // WV-001: stock weighting is valid
    // ==========================================================================
    #[test]
    fn test_wv_001_default_weights_valid() {
        let step = validate_weights(&ScoreWeights::default(), 1).unwrap();
        assert_eq!(step.step_number, 1);
        assert_eq!(step.rule_id, "weight_validation");
        assert_eq!(step.output["total"], 100);
    }

    // ==========================================================================
    // WV-002: off-by-one totals are rejected
    // ==========================================================================
    #[test]
    fn test_wv_002_sum_99_rejected() {
        match validate_weights(&weights(30, 30, 20, 19), 1) {
            Err(EngineError::InvalidWeightConfig { total }) => assert_eq!(total, 99),
            other => panic!("Expected InvalidWeightConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_wv_002_sum_101_rejected() {
        match validate_weights(&weights(30, 30, 20, 21), 1) {
            Err(EngineError::InvalidWeightConfig { total }) => assert_eq!(total, 101),
            other => panic!("Expected InvalidWeightConfig, got {:?}", other),
        }
    }

    // ==========================================================================
    // WV-003: a single category may carry all of the weight
    // ==========================================================================
    #[test]
    fn test_wv_003_all_weight_on_one_category() {
        assert!(validate_weights(&weights(0, 0, 100, 0), 4).is_ok());
    }

    #[test]
    fn test_all_zero_rejected() {
        assert!(matches!(
            validate_weights(&weights(0, 0, 0, 0), 1),
            Err(EngineError::InvalidWeightConfig { total: 0 })
        ));
    }

    #[test]
    fn test_huge_weights_do_not_wrap_to_100() {
        // Wrapping u32 addition could land on 100; the u64 total cannot.
        let result = validate_weights(&weights(u32::MAX, 101, 0, 0), 1);
        assert!(result.is_err());
    }
}
