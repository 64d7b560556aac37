//! HTTP API module for the Groove Engine.
//!
//! This module exposes recurring shift expansion and weekly Groove Score
//! calculation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ROLE_HEADER, create_router};
pub use request::{ExpandShiftsRequest, LocationBreakdownRequest, WeeklyScoreRequest};
pub use response::{ApiError, ApiErrorResponse, ExpandShiftsResponse, WeeklyScoreResponse};
pub use state::AppState;
