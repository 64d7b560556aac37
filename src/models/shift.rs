//! Shift template and shift instance models.
//!
//! A [`ShiftTemplate`] is the form a manager fills in once; a
//! [`ShiftInstance`] is one concrete occurrence materialized from it by
//! the recurrence expander.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The template a recurring shift is generated from.
///
/// The `start_time` and `end_time` are times of day. When the end time is
/// at or before the start time the shift runs overnight and ends on the
/// following calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Identifier carried by every generated instance as `parent_shift_id`.
    pub id: String,
    /// Display title of the shift (e.g., "Morning Floor").
    pub title: String,
    /// The work location the shift is held at.
    pub location_id: String,
    /// The staff member assigned to the shift.
    pub assignee_id: String,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// The date of the first occurrence.
    pub base_date: NaiveDate,
}

impl ShiftTemplate {
    /// Returns true if the shift crosses midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use groove_engine::models::ShiftTemplate;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let night = ShiftTemplate {
    ///     id: "tpl_night".to_string(),
    ///     title: "Night Desk".to_string(),
    ///     location_id: "loc_north".to_string(),
    ///     assignee_id: "staff_007".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     base_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    /// };
    /// assert!(night.is_overnight());
    /// ```
    pub fn is_overnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Materializes the occurrence of this template on `date`.
    ///
    /// `occurrence_index` is the 0-based position of the occurrence in the
    /// expanded sequence. Returns `None` when an overnight shift on `date`
    /// would end past the last representable date.
    pub fn instance_on(&self, date: NaiveDate, occurrence_index: u32) -> Option<ShiftInstance> {
        let start_time = date.and_time(self.start_time);
        let end_date = if self.is_overnight() {
            date.checked_add_days(Days::new(1))?
        } else {
            date
        };

        Some(ShiftInstance {
            id: format!("{}_{}", self.id, date.format("%Y%m%d")),
            parent_shift_id: self.id.clone(),
            title: self.title.clone(),
            location_id: self.location_id.clone(),
            assignee_id: self.assignee_id.clone(),
            date,
            start_time,
            end_time: end_date.and_time(self.end_time),
            occurrence_index,
        })
    }
}

/// A concrete shift generated from a [`ShiftTemplate`].
///
/// Instances are plain values; expanding the same template and rule twice
/// yields identical instances, including their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInstance {
    /// Deterministic identifier: the parent id followed by the date.
    pub id: String,
    /// The id of the template this instance was generated from.
    pub parent_shift_id: String,
    /// Display title copied from the template.
    pub title: String,
    /// The work location copied from the template.
    pub location_id: String,
    /// The assigned staff member copied from the template.
    pub assignee_id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Resolved start timestamp.
    pub start_time: NaiveDateTime,
    /// Resolved end timestamp.
    pub end_time: NaiveDateTime,
    /// 0-based position in the expanded sequence.
    pub occurrence_index: u32,
}

impl ShiftInstance {
    /// Returns the scheduled length of the shift in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use groove_engine::models::ShiftTemplate;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let template = ShiftTemplate {
    ///     id: "tpl_am".to_string(),
    ///     title: "Morning Floor".to_string(),
    ///     location_id: "loc_north".to_string(),
    ///     assignee_id: "staff_001".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    ///     base_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    /// };
    /// let instance = template.instance_on(template.base_date, 0).unwrap();
    /// assert_eq!(instance.scheduled_hours(), Decimal::new(85, 1)); // 8.5
    /// ```
    pub fn scheduled_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the day of the week the shift starts on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M")
            .unwrap()
    }

    fn template(start: &str, end: &str) -> ShiftTemplate {
        ShiftTemplate {
            id: "tpl_001".to_string(),
            title: "Front Counter".to_string(),
            location_id: "loc_north".to_string(),
            assignee_id: "staff_001".to_string(),
            start_time: make_time(start),
            end_time: make_time(end),
            base_date: make_date("2026-01-12"),
        }
    }

    /// SH-001: day shift stays on the same date
    #[test]
    fn test_day_shift_instance_same_date() {
        let tpl = template("09:00", "17:00");
        let instance = tpl.instance_on(make_date("2026-01-14"), 2).unwrap();

        assert_eq!(instance.start_time, make_datetime("2026-01-14", "09:00"));
        assert_eq!(instance.end_time, make_datetime("2026-01-14", "17:00"));
        assert_eq!(instance.occurrence_index, 2);
        assert_eq!(instance.parent_shift_id, "tpl_001");
        assert_eq!(instance.id, "tpl_001_20260114");
    }

    /// SH-002: overnight shift ends the next day
    #[test]
    fn test_overnight_instance_ends_next_day() {
        let tpl = template("22:00", "06:00");
        assert!(tpl.is_overnight());

        let instance = tpl.instance_on(make_date("2026-01-31"), 0).unwrap();
        assert_eq!(instance.start_time, make_datetime("2026-01-31", "22:00"));
        assert_eq!(instance.end_time, make_datetime("2026-02-01", "06:00"));
        assert_eq!(instance.scheduled_hours(), Decimal::new(8, 0));
    }

    /// SH-003: equal start and end is treated as a 24 hour shift
    #[test]
    fn test_equal_start_and_end_is_full_day() {
        let tpl = template("07:00", "07:00");
        let instance = tpl.instance_on(make_date("2026-01-12"), 0).unwrap();
        assert_eq!(instance.scheduled_hours(), Decimal::new(24, 0));
    }

    #[test]
    fn test_overnight_instance_at_last_date_is_none() {
        let tpl = template("22:00", "06:00");
        assert!(tpl.instance_on(NaiveDate::MAX, 0).is_none());
        assert!(template("09:00", "17:00").instance_on(NaiveDate::MAX, 0).is_some());
    }

    #[test]
    fn test_instance_copies_template_fields() {
        let tpl = template("09:00", "13:00");
        let instance = tpl.instance_on(tpl.base_date, 0).unwrap();

        assert_eq!(instance.title, "Front Counter");
        assert_eq!(instance.location_id, "loc_north");
        assert_eq!(instance.assignee_id, "staff_001");
        assert_eq!(instance.day_of_week(), Weekday::Mon);
    }

    #[test]
    fn test_template_deserialization() {
        let json = r#"{
            "id": "tpl_001",
            "title": "Front Counter",
            "location_id": "loc_north",
            "assignee_id": "staff_001",
            "start_time": "09:00:00",
            "end_time": "17:00:00",
            "base_date": "2026-01-12"
        }"#;

        let tpl: ShiftTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(tpl, template("09:00", "17:00"));
    }
}
