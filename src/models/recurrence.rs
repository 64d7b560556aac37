//! Recurrence rule model.
//!
//! A [`RecurrenceRule`] describes how one shift template repeats. The
//! raw rule mirrors what the scheduling form submits, so the interval and
//! weekday indices are signed and are checked by
//! [`validate_rule`](crate::calculation::validate_rule) before expansion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The unit a recurrence rule steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    /// Every `interval` days.
    Daily,
    /// Selected weekdays of every `interval`-th week.
    Weekly,
    /// The base day-of-month every `interval` months.
    Monthly,
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceType::Daily => write!(f, "daily"),
            RecurrenceType::Weekly => write!(f, "weekly"),
            RecurrenceType::Monthly => write!(f, "monthly"),
        }
    }
}

/// How a shift template repeats.
///
/// At most 100 occurrences are ever produced. `end_date` and
/// `occurrences` may be combined, in which case whichever is reached
/// first ends the sequence.
///
/// # Example
///
/// ```
/// use groove_engine::models::{RecurrenceRule, RecurrenceType};
///
/// let json = r#"{"type": "weekly", "interval": 1, "days_of_week": [1, 3, 5], "occurrences": 6}"#;
/// let rule: RecurrenceRule = serde_json::from_str(json).unwrap();
/// assert_eq!(rule.recurrence_type, RecurrenceType::Weekly);
/// assert_eq!(rule.days_of_week, vec![1, 3, 5]);
/// assert!(rule.end_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// Daily, weekly or monthly stepping.
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    /// "Every N units"; must be at least 1.
    pub interval: i32,
    /// Weekday indices, 0 = Sunday through 6 = Saturday. Used by weekly rules.
    #[serde(default)]
    pub days_of_week: Vec<i32>,
    /// Last date an occurrence may fall on (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Maximum number of occurrences to produce.
    #[serde(default)]
    pub occurrences: Option<u32>,
}

impl RecurrenceRule {
    /// A daily rule with no terminal condition.
    pub fn daily(interval: i32) -> Self {
        Self {
            recurrence_type: RecurrenceType::Daily,
            interval,
            days_of_week: vec![],
            end_date: None,
            occurrences: None,
        }
    }

    /// A weekly rule on the given weekday indices with no terminal condition.
    pub fn weekly(interval: i32, days_of_week: Vec<i32>) -> Self {
        Self {
            recurrence_type: RecurrenceType::Weekly,
            interval,
            days_of_week,
            end_date: None,
            occurrences: None,
        }
    }

    /// A monthly rule with no terminal condition.
    pub fn monthly(interval: i32) -> Self {
        Self {
            recurrence_type: RecurrenceType::Monthly,
            interval,
            days_of_week: vec![],
            end_date: None,
            occurrences: None,
        }
    }

    /// Limits the rule to `count` occurrences.
    pub fn with_occurrences(mut self, count: u32) -> Self {
        self.occurrences = Some(count);
        self
    }

    /// Ends the rule on `date` (inclusive).
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_type_serialization() {
        assert_eq!(
            serde_json::to_string(&RecurrenceType::Monthly).unwrap(),
            "\"monthly\""
        );
        let parsed: RecurrenceType = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(parsed, RecurrenceType::Daily);
    }

    #[test]
    fn test_unknown_recurrence_type_rejected() {
        let result: Result<RecurrenceType, _> = serde_json::from_str("\"yearly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_defaults_when_fields_omitted() {
        let rule: RecurrenceRule = serde_json::from_str(r#"{"type": "daily", "interval": 2}"#).unwrap();
        assert_eq!(rule, RecurrenceRule::daily(2));
    }

    #[test]
    fn test_builder_sets_terminal_conditions() {
        let end = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let rule = RecurrenceRule::monthly(1)
            .with_occurrences(4)
            .with_end_date(end);

        assert_eq!(rule.occurrences, Some(4));
        assert_eq!(rule.end_date, Some(end));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecurrenceType::Weekly.to_string(), "weekly");
    }
}
