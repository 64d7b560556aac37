//! Response types for the Groove Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::Permission;
use crate::error::EngineError;
use crate::models::{AuditTrace, ScoreWeights, ShiftInstance, WeeklyScore};

/// Response body for the `/shifts/expand` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandShiftsResponse {
    /// The template every instance was generated from.
    pub parent_shift_id: String,
    /// Number of instances generated.
    pub count: usize,
    /// Scheduled hours across all instances.
    pub total_hours: Decimal,
    /// The generated instances, in start-time order.
    pub instances: Vec<ShiftInstance>,
}

/// Response body for the `/scores/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScoreResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The staff member the score is for.
    pub staff_id: String,
    /// The first day of the scored week.
    pub week_start: NaiveDate,
    /// The weights the score was computed with.
    pub weights: ScoreWeights,
    /// The blended weekly score.
    pub score: WeeklyScore,
    /// Every rule application recorded while computing the score.
    pub audit_trace: AuditTrace,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response for a body that could not be decoded.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 401 response for a request without a recognizable role.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::with_details(
                "UNAUTHENTICATED",
                message,
                "Send the caller's role in the x-user-role header",
            ),
        }
    }

    /// A 403 response for a role lacking `permission`.
    pub fn forbidden(permission: Permission) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: ApiError::new(
                "FORBIDDEN",
                format!("This action requires the '{}' permission", permission),
            ),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRule { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RULE",
                    format!("Invalid recurrence rule: {}", message),
                    "Correct the recurrence settings and submit again",
                ),
            },
            EngineError::InvalidWeightConfig { total } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WEIGHT_CONFIG",
                    format!("Category weights must sum to 100, got {}", total),
                    "Adjust the category weights so they total exactly 100",
                ),
            },
            EngineError::NoEligibleDays => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_ELIGIBLE_DAYS",
                    "No days worked this week",
                    "The week is not eligible for a Groove Score",
                ),
            },
            EngineError::InvalidBreakdown {
                location_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_BREAKDOWN",
                    format!("Invalid breakdown for location '{}'", location_id),
                    message,
                ),
            },
        }
    }
}
