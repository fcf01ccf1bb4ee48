//! Response types for the punch-clock API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine rejections and errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::engine::Rejection;
use crate::error::ClockError;

/// Body of a successful punch or history-free confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchResponse {
    /// The fixed confirmation text for the accepted action.
    pub message: String,
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

    /// Creates an unparseable-timestamp error response.
    pub fn invalid_timestamp(details: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_TIMESTAMP",
            "Time punch could not be parsed",
            details,
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<Rejection> for ApiErrorResponse {
    fn from(rejection: Rejection) -> Self {
        // Every transition rejection is a state conflict: the request was
        // well-formed but not legal right now.
        ApiErrorResponse {
            status: StatusCode::CONFLICT,
            error: ApiError::new(rejection.code(), rejection.to_string()),
        }
    }
}

impl From<ClockError> for ApiErrorResponse {
    fn from(error: ClockError) -> Self {
        match error {
            // Corruption details are logged, not shown to the employee.
            ClockError::DataIntegrity { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(
                    "DATA_INTEGRITY",
                    "Shift records are inconsistent; contact an administrator",
                ),
            },
            ClockError::Store { .. } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new(
                    "STORE_UNAVAILABLE",
                    "The record store is unavailable; please retry",
                ),
            },
        }
    }
}
