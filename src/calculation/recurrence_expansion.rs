//! Recurring shift expansion.
//!
//! This module turns a [`ShiftTemplate`] and a [`RecurrenceRule`] into the
//! bounded, ordered list of [`ShiftInstance`]s the rule describes.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{RecurrenceRule, RecurrenceType, ShiftInstance, ShiftTemplate};

use super::month_arithmetic::add_months_clamped;
use super::rule_validation::{ValidatedRule, validate_rule};

/// Expands a shift template into concrete shift instances.
///
/// The first candidate is the template's base date. Expansion stops at
/// whichever comes first: `occurrences` instances, the first date after
/// `end_date`, or [`MAX_OCCURRENCES`](super::MAX_OCCURRENCES) instances.
///
/// - `daily` rules produce a shift every `interval` days.
/// - `weekly` rules produce a shift on each selected weekday of every
///   `interval`-th week. Weeks start on Sunday, and the week containing the
///   base date is the first week.
/// - `monthly` rules produce a shift every `interval` months on the base
///   day-of-month, clamped to the end of shorter months.
///
/// A weekly rule with no selected weekdays produces no instances.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRule`] if the rule fails validation, or if
/// the sequence would step past the last representable date before any
/// terminal condition is reached, or if an overnight occurrence would end
/// past that date. No partial list is ever returned.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::expand;
/// use groove_engine::models::{RecurrenceRule, ShiftTemplate};
/// use chrono::{NaiveDate, NaiveTime, Weekday};
///
/// let template = ShiftTemplate {
///     id: "tpl_am".to_string(),
///     title: "Morning Floor".to_string(),
///     location_id: "loc_north".to_string(),
///     assignee_id: "staff_001".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     base_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(), // Monday
/// };
/// let rule = RecurrenceRule::weekly(1, vec![1, 3, 5]).with_occurrences(6);
///
/// let instances = expand(&template, &rule).unwrap();
/// let days: Vec<Weekday> = instances.iter().map(|i| i.day_of_week()).collect();
/// assert_eq!(
///     days,
///     vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Mon, Weekday::Wed, Weekday::Fri]
/// );
/// ```
pub fn expand(template: &ShiftTemplate, rule: &RecurrenceRule) -> EngineResult<Vec<ShiftInstance>> {
    let rule = validate_rule(rule)?;

    if rule.limit == 0
        || (rule.recurrence_type == RecurrenceType::Weekly && rule.weekdays.is_empty())
    {
        return Ok(Vec::new());
    }

    let mut instances = Vec::with_capacity(rule.limit as usize);
    let mut cursor = template.base_date;
    let mut steps_taken: u32 = 0;

    loop {
        if rule.is_past_end(cursor) {
            break;
        }

        if rule.is_candidate(cursor) {
            let instance = template
                .instance_on(cursor, instances.len() as u32)
                .ok_or_else(|| {
                    EngineError::invalid_rule(format!(
                        "overnight shift on {} ends past the last supported date",
                        cursor
                    ))
                })?;
            instances.push(instance);
            if instances.len() as u32 >= rule.limit {
                break;
            }
        }

        steps_taken += 1;
        match next_cursor(&rule, template.base_date, cursor, steps_taken) {
            Some(next) => cursor = next,
            // Anything past the representable range is also past any end date.
            None if rule.end_date.is_some() => break,
            None => {
                return Err(EngineError::invalid_rule(format!(
                    "{} recurrence from {} steps past the last supported date",
                    rule.recurrence_type, template.base_date
                )));
            }
        }
    }

    Ok(instances)
}

/// Computes the cursor date after `cursor`.
///
/// `steps_taken` counts advances made so far, including this one; monthly
/// rules use it to step from the base date so the day-of-month survives
/// short months.
fn next_cursor(
    rule: &ValidatedRule,
    base_date: NaiveDate,
    cursor: NaiveDate,
    steps_taken: u32,
) -> Option<NaiveDate> {
    match rule.recurrence_type {
        RecurrenceType::Daily => cursor.checked_add_days(Days::new(u64::from(rule.interval))),
        RecurrenceType::Weekly => {
            let next = cursor.succ_opt()?;
            if next.weekday() == Weekday::Sun && rule.interval > 1 {
                let skipped_weeks = u64::from(rule.interval - 1);
                next.checked_add_days(Days::new(skipped_weeks * 7))
            } else {
                Some(next)
            }
        }
        RecurrenceType::Monthly => {
            let months = steps_taken.checked_mul(rule.interval)?;
            add_months_clamped(base_date, months)
        }
    }
}
