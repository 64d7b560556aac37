//! Calendar month stepping for monthly recurrences.

use chrono::{Months, NaiveDate};

/// Adds `months` whole months to `base`, clamping to the end of the
/// target month when the base day-of-month does not exist there.
///
/// Monthly occurrences are always computed from the base date rather than
/// from the previous occurrence, so a series starting on the 31st returns
/// to the 31st in every month long enough to have one.
///
/// Returns `None` if the result is outside chrono's representable range.
///
/// # Examples
///
/// ```
/// use groove_engine::calculation::add_months_clamped;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(add_months_clamped(jan_31, 1), NaiveDate::from_ymd_opt(2026, 2, 28));
/// assert_eq!(add_months_clamped(jan_31, 2), NaiveDate::from_ymd_opt(2026, 3, 31));
/// ```
pub fn add_months_clamped(base: NaiveDate, months: u32) -> Option<NaiveDate> {
    base.checked_add_months(Months::new(months))
}
