//! HTTP request handlers for the punch-clock API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::clock::PunchOutcome;
use crate::error::ClockError;

use super::request::PunchRequest;
use super::response::{ApiError, ApiErrorResponse, PunchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/punch", post(punch_handler))
        .route("/employees/:employee_id/shifts", get(history_handler))
        .with_state(state)
}

/// Handler for POST /punch.
///
/// Accepts one punch and returns the fixed confirmation text, or the
/// rejection explaining why the action is not legal right now.
async fn punch_handler(
    State(state): State<AppState>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let api_error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error),
            )
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        action = %request.action,
        "Processing punch"
    );

    // Parsing the time punch is this layer's job; the core takes a
    // NaiveDateTime.
    let time_punch = match request.time_punch() {
        Ok(ts) => ts,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                time = %request.time,
                date = %request.date,
                error = %err,
                "Unparseable time punch"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::invalid_timestamp(err.to_string())),
            )
                .into_response();
        }
    };

    match state
        .clock()
        .punch(&request.employee_id, request.action, time_punch)
    {
        Ok(PunchOutcome::Accepted { action, message }) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                action = %action,
                "Punch accepted"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(PunchResponse {
                    message: message.to_string(),
                }),
            )
                .into_response()
        }
        Ok(PunchOutcome::Rejected(rejection)) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                action = %request.action,
                rejection = rejection.code(),
                "Punch rejected"
            );
            let response: ApiErrorResponse = rejection.into();
            response.into_response()
        }
        Err(err) => {
            // Corruption is a fatal signal, not a user problem; log it
            // loudly and keep the response generic.
            match &err {
                ClockError::DataIntegrity { .. } => error!(
                    correlation_id = %correlation_id,
                    employee_id = %request.employee_id,
                    error = %err,
                    "Record corruption detected"
                ),
                ClockError::Store { .. } => warn!(
                    correlation_id = %correlation_id,
                    employee_id = %request.employee_id,
                    error = %err,
                    "Record store failure"
                ),
            }
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}

/// Handler for GET /employees/{employee_id}/shifts.
///
/// Returns the employee's shifts most recent first, each joined with its
/// lunch and break spans. A reporting view only; it enforces nothing.
async fn history_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.clock().history(&employee_id) {
        Ok(history) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                shifts = history.len(),
                "History read"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(history),
            )
                .into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "History read failed"
            );
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}
