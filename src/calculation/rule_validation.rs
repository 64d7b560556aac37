//! Recurrence rule validation.
//!
//! This module checks a raw [`RecurrenceRule`] before expansion and
//! converts it into a [`ValidatedRule`] whose interval is known to be
//! positive and whose weekday indices are known to be in range.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{RecurrenceRule, RecurrenceType};

/// The hard ceiling on instances produced by a single expansion.
///
/// Applies regardless of `occurrences` or `end_date`.
pub const MAX_OCCURRENCES: u32 = 100;

/// A set of weekdays indexed 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayMask([bool; 7]);

impl WeekdayMask {
    /// Returns true if `weekday` is in the set.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    /// Returns true if no weekday is selected.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|selected| *selected)
    }

    fn insert(&mut self, index: usize) {
        self.0[index] = true;
    }
}

/// A recurrence rule that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRule {
    /// Daily, weekly or monthly stepping.
    pub recurrence_type: RecurrenceType,
    /// "Every N units", at least 1.
    pub interval: u32,
    /// Selected weekdays (meaningful for weekly rules).
    pub weekdays: WeekdayMask,
    /// Last date an occurrence may fall on (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Number of instances to produce at most, already capped at [`MAX_OCCURRENCES`].
    pub limit: u32,
}

impl ValidatedRule {
    /// Returns true if `date` is past the rule's end date.
    pub fn is_past_end(&self, date: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| date > end)
    }

    /// Returns true if an occurrence may fall on `date`.
    pub fn is_candidate(&self, date: NaiveDate) -> bool {
        match self.recurrence_type {
            RecurrenceType::Daily | RecurrenceType::Monthly => true,
            RecurrenceType::Weekly => self.weekdays.contains(date.weekday()),
        }
    }
}

/// Validates a recurrence rule.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRule`] if the interval is below 1 or any
/// weekday index lies outside `0..=6`. Weekday indices are checked for
/// every rule type, even though only weekly rules use them.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::validate_rule;
/// use groove_engine::models::RecurrenceRule;
///
/// let rule = RecurrenceRule::weekly(2, vec![1, 3]).with_occurrences(500);
/// let validated = validate_rule(&rule).unwrap();
/// assert_eq!(validated.interval, 2);
/// assert_eq!(validated.limit, 100);
///
/// assert!(validate_rule(&RecurrenceRule::daily(0)).is_err());
/// assert!(validate_rule(&RecurrenceRule::weekly(1, vec![7])).is_err());
/// ```
pub fn validate_rule(rule: &RecurrenceRule) -> EngineResult<ValidatedRule> {
    if rule.interval < 1 {
        return Err(EngineError::invalid_rule(format!(
            "interval must be at least 1, got {}",
            rule.interval
        )));
    }

    let mut weekdays = WeekdayMask::default();
    for &index in &rule.days_of_week {
        let slot = usize::try_from(index)
            .ok()
            .filter(|slot| *slot < 7)
            .ok_or_else(|| {
                EngineError::invalid_rule(format!(
                    "weekday index {} is outside 0 (Sunday) to 6 (Saturday)",
                    index
                ))
            })?;
        weekdays.insert(slot);
    }

    let limit = rule
        .occurrences
        .map_or(MAX_OCCURRENCES, |count| count.min(MAX_OCCURRENCES));

    Ok(ValidatedRule {
        recurrence_type: rule.recurrence_type,
        interval: rule.interval as u32,
        weekdays,
        end_date: rule.end_date,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // RV-001: zero and negative intervals are rejected
    // ==========================================================================
    #[test]
    fn test_rv_001_non_positive_interval_rejected() {
        for interval in [0, -1, i32::MIN] {
            let result = validate_rule(&RecurrenceRule::daily(interval));
            match result {
                Err(EngineError::InvalidRule { message }) => {
                    assert!(message.contains("interval"), "unexpected message: {}", message);
                }
                other => panic!("Expected InvalidRule for interval {}, got {:?}", interval, other),
            }
        }
    }

    // ==========================================================================
    // RV-002: weekday indices outside 0-6 are rejected
    // ==========================================================================
    #[test]
    fn test_rv_002_out_of_range_weekday_rejected() {
        for index in [-1, 7, 42] {
            let result = validate_rule(&RecurrenceRule::weekly(1, vec![1, index]));
            assert!(
                matches!(result, Err(EngineError::InvalidRule { .. })),
                "index {} should be rejected",
                index
            );
        }
    }

    // ==========================================================================
    // RV-003: weekday indices are checked on non-weekly rules too
    // ==========================================================================
    #[test]
    fn test_rv_003_weekday_checked_for_daily_rule() {
        let mut rule = RecurrenceRule::daily(1);
        rule.days_of_week = vec![9];
        assert!(validate_rule(&rule).is_err());
    }

    #[test]
    fn test_weekday_mask_uses_sunday_zero_indexing() {
        let validated = validate_rule(&RecurrenceRule::weekly(1, vec![0, 6])).unwrap();
        assert!(validated.weekdays.contains(Weekday::Sun));
        assert!(validated.weekdays.contains(Weekday::Sat));
        assert!(!validated.weekdays.contains(Weekday::Mon));
    }

    #[test]
    fn test_duplicate_weekdays_are_harmless() {
        let validated = validate_rule(&RecurrenceRule::weekly(1, vec![3, 3, 3])).unwrap();
        assert!(validated.weekdays.contains(Weekday::Wed));
        assert!(!validated.weekdays.is_empty());
    }

    #[test]
    fn test_empty_weekdays_validate() {
        let validated = validate_rule(&RecurrenceRule::weekly(1, vec![])).unwrap();
        assert!(validated.weekdays.is_empty());
    }

    #[test]
    fn test_limit_defaults_to_cap() {
        let validated = validate_rule(&RecurrenceRule::daily(1)).unwrap();
        assert_eq!(validated.limit, MAX_OCCURRENCES);
    }

    #[test]
    fn test_limit_respects_smaller_occurrence_count() {
        let validated = validate_rule(&RecurrenceRule::daily(1).with_occurrences(12)).unwrap();
        assert_eq!(validated.limit, 12);
    }

    #[test]
    fn test_candidate_dates_by_type() {
        // 2026-01-12 is a Monday, 2026-01-13 a Tuesday
        let monday = make_date("2026-01-12");
        let tuesday = make_date("2026-01-13");

        let weekly = validate_rule(&RecurrenceRule::weekly(1, vec![1])).unwrap();
        assert!(weekly.is_candidate(monday));
        assert!(!weekly.is_candidate(tuesday));

        let daily = validate_rule(&RecurrenceRule::daily(1)).unwrap();
        assert!(daily.is_candidate(tuesday));
    }

    #[test]
    fn test_end_date_is_inclusive() {
        let end = make_date("2026-01-31");
        let validated = validate_rule(&RecurrenceRule::daily(1).with_end_date(end)).unwrap();

        assert!(!validated.is_past_end(end));
        assert!(validated.is_past_end(make_date("2026-02-01")));
    }
}
