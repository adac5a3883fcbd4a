//! Response types for the Settlement Engine API.
//!
//! This module defines the error response structures used when a request
//! cannot be read at all. Settlement rejections are not API errors; they are
//! returned as a [`SettlementOutcome`](crate::models::SettlementOutcome).

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error for a total that does not fit in a decimal.
    pub fn amount_overflow(message: impl std::fmt::Display) -> Self {
        Self::new("AMOUNT_OVERFLOW", message.to_string())
    }

    /// Creates an error for a period whose start is after its end.
    pub fn invalid_period(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::with_details(
            "INVALID_PERIOD",
            format!("Period start {} is after end {}", start, end),
            "The start date must be on or before the end date",
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

impl ApiErrorResponse {
    /// Creates a 400 Bad Request response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Creates a 422 Unprocessable Entity response.
    pub fn unprocessable(error: ApiError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_period_error() {
        let error = ApiError::invalid_period("2025-11-30", "2025-11-01");
        assert_eq!(error.code, "INVALID_PERIOD");
        assert!(error.message.contains("2025-11-30"));
    }

    #[test]
    fn test_amount_overflow_is_unprocessable() {
        let response = ApiErrorResponse::unprocessable(ApiError::amount_overflow(
            "Calculated amount is too large",
        ));
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "AMOUNT_OVERFLOW");
        assert_eq!(response.error.message, "Calculated amount is too large");
    }

    #[test]
    fn test_bad_request_status() {
        let response = ApiErrorResponse::bad_request(ApiError::malformed_json("oops"));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_JSON");
    }
}
