//! Core data models for the Groove Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod recurrence;
mod score;
mod shift;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, ScoreCalculationResult};
pub use recurrence::{RecurrenceRule, RecurrenceType};
pub use score::{CategoryScores, LocationScoreBreakdown, ScoreCategory, ScoreWeights, WeeklyScore};
pub use shift::{ShiftInstance, ShiftTemplate};
