//! HTTP request handlers for the Groove Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{Permission, RequestContext, Role};
use crate::calculation::{aggregate_with_audit, expand};
use crate::models::{LocationScoreBreakdown, ScoreWeights};

use super::request::{ExpandShiftsRequest, WeeklyScoreRequest};
use super::response::{ApiError, ApiErrorResponse, ExpandShiftsResponse, WeeklyScoreResponse};
use super::state::AppState;

/// Header carrying the caller's role.
pub const ROLE_HEADER: &str = "x-user-role";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/expand", post(expand_shifts_handler))
        .route("/scores/weekly", post(weekly_score_handler))
        .route("/scores/weights", get(default_weights_handler))
        .with_state(state)
}

/// Handler for POST /shifts/expand.
///
/// Expands a recurring shift template into its concrete instances.
async fn expand_shifts_handler(
    headers: HeaderMap,
    payload: Result<Json<ExpandShiftsRequest>, JsonRejection>,
) -> Result<Json<ExpandShiftsResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift expansion request");

    let context = request_context(&headers, correlation_id)?;
    require(&context, Permission::ManageShifts, correlation_id)?;
    let request = decode_body(payload, correlation_id)?;

    let start_time = Instant::now();
    let instances = expand(&request.template, &request.rule).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            template_id = %request.template.id,
            error = %err,
            "Shift expansion failed"
        );
        ApiErrorResponse::from(err)
    })?;

    let total_hours: Decimal = instances.iter().map(|i| i.scheduled_hours()).sum();
    info!(
        correlation_id = %correlation_id,
        template_id = %request.template.id,
        recurrence = %request.rule.recurrence_type,
        instance_count = instances.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Shift expansion completed successfully"
    );

    Ok(Json(ExpandShiftsResponse {
        parent_shift_id: request.template.id,
        count: instances.len(),
        total_hours: total_hours.normalize(),
        instances,
    }))
}

/// Handler for POST /scores/weekly.
///
/// Computes a staff member's weekly Groove Score. Scoring with weights
/// other than the configured defaults requires the `configure_weights`
/// permission.
async fn weekly_score_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<WeeklyScoreRequest>, JsonRejection>,
) -> Result<Json<WeeklyScoreResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly score request");

    let context = request_context(&headers, correlation_id)?;
    require(&context, Permission::ViewScores, correlation_id)?;
    let request = decode_body(payload, correlation_id)?;

    let default_weights = state.config().default_weights();
    let weights = match request.weights {
        Some(custom) if custom != default_weights => {
            require(&context, Permission::ConfigureWeights, correlation_id)?;
            custom
        }
        _ => default_weights,
    };

    let breakdowns: Vec<LocationScoreBreakdown> =
        request.breakdowns.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let result = aggregate_with_audit(&breakdowns, &weights).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            staff_id = %request.staff_id,
            error = %err,
            "Weekly score calculation failed"
        );
        ApiErrorResponse::from(err)
    })?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        staff_id = %request.staff_id,
        week_start = %request.week_start,
        locations = breakdowns.len(),
        total_score = result.score.total_score,
        duration_us,
        "Weekly score calculated successfully"
    );

    Ok(Json(WeeklyScoreResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        staff_id: request.staff_id,
        week_start: request.week_start,
        weights,
        score: result.score,
        audit_trace: result.audit_trace,
        duration_us,
    }))
}

/// Handler for GET /scores/weights.
///
/// Returns the configured default category weights.
async fn default_weights_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ScoreWeights>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let context = request_context(&headers, correlation_id)?;
    require(&context, Permission::ViewScores, correlation_id)?;

    Ok(Json(state.config().default_weights()))
}

/// Resolves the caller's role from the request headers.
fn request_context(
    headers: &HeaderMap,
    correlation_id: Uuid,
) -> Result<RequestContext, ApiErrorResponse> {
    let raw = headers
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            warn!(correlation_id = %correlation_id, "Request without role header");
            ApiErrorResponse::unauthenticated(format!("Missing {} header", ROLE_HEADER))
        })?;

    let role = raw.parse::<Role>().map_err(|message| {
        warn!(correlation_id = %correlation_id, role = %raw, "Unknown role");
        ApiErrorResponse::unauthenticated(message)
    })?;

    Ok(RequestContext::new(role))
}

/// Rejects the request unless the caller holds `permission`.
fn require(
    context: &RequestContext,
    permission: Permission,
    correlation_id: Uuid,
) -> Result<(), ApiErrorResponse> {
    if context.can(permission) {
        return Ok(());
    }
    warn!(
        correlation_id = %correlation_id,
        role = %context.role,
        permission = %permission,
        "Permission denied"
    );
    Err(ApiErrorResponse::forbidden(permission))
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn decode_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}
