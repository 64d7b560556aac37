//! Request types for the Groove Engine API.
//!
//! This module defines the JSON request structures for the
//! `/shifts/expand` and `/scores/weekly` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CategoryScores, LocationScoreBreakdown, RecurrenceRule, ScoreWeights, ShiftTemplate,
};

/// Request body for the `/shifts/expand` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandShiftsRequest {
    /// The shift the recurrence starts from.
    pub template: ShiftTemplate,
    /// How the shift repeats.
    pub rule: RecurrenceRule,
}

/// Request body for the `/scores/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScoreRequest {
    /// The staff member being scored.
    pub staff_id: String,
    /// The first day of the scored week.
    pub week_start: NaiveDate,
    /// Per-location category scores for the week.
    pub breakdowns: Vec<LocationBreakdownRequest>,
    /// Category weights; the configured defaults apply when omitted.
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
}

/// One location's scores as submitted by the scoring screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationBreakdownRequest {
    /// The location the scores were observed at.
    pub location_id: String,
    /// Days worked at this location during the week.
    pub days_worked: u32,
    /// Attendance percentage.
    pub attendance: Decimal,
    /// Punctuality percentage.
    pub punctuality: Decimal,
    /// Task efficiency percentage.
    pub task_efficiency: Decimal,
    /// Customer review percentage.
    pub customer_reviews: Decimal,
}

impl From<LocationBreakdownRequest> for LocationScoreBreakdown {
    fn from(req: LocationBreakdownRequest) -> Self {
        LocationScoreBreakdown {
            location_id: req.location_id,
            days_worked: req.days_worked,
            scores: CategoryScores {
                attendance: req.attendance,
                punctuality: req.punctuality,
                task_efficiency: req.task_efficiency,
                customer_reviews: req.customer_reviews,
            },
        }
    }
}
