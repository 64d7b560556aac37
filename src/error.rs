//! Error types for the Groove Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation failure the recurrence expander, the score
//! aggregator and the configuration loader can report.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Groove Engine.
///
/// Every variant is a deterministic validation failure. Nothing here is
/// transient, so callers never retry; a call either fully succeeds or
/// fully fails.
///
/// # Example
///
/// ```
/// use groove_engine::error::EngineError;
///
/// let error = EngineError::InvalidWeightConfig { total: 99 };
/// assert_eq!(error.to_string(), "Category weights must sum to 100, got 99");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A recurrence rule was malformed.
    #[error("Invalid recurrence rule: {message}")]
    InvalidRule {
        /// A description of what made the rule invalid.
        message: String,
    },

    /// Category weights did not sum to exactly 100.
    #[error("Category weights must sum to 100, got {total}")]
    InvalidWeightConfig {
        /// The actual sum of the configured weights.
        total: u64,
    },

    /// No working days were recorded across all breakdowns for the week.
    #[error("No eligible days worked: the week cannot be scored")]
    NoEligibleDays,

    /// A location breakdown carried an out-of-range category value.
    #[error("Invalid breakdown for location '{location_id}': {message}")]
    InvalidBreakdown {
        /// The location the breakdown belongs to.
        location_id: String,
        /// A description of what made the breakdown invalid.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_rule(message: impl Into<String>) -> Self {
        EngineError::InvalidRule {
            message: message.into(),
        }
    }

    pub(crate) fn score_out_of_range(location_id: &str, category: &str, value: Decimal) -> Self {
        EngineError::InvalidBreakdown {
            location_id: location_id.to_string(),
            message: format!(
                "{} score {} is outside 0-100",
                category,
                value.normalize()
            ),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
