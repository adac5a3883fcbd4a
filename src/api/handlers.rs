//! HTTP request handlers for the Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_settlement, summarize_work_logs};
use crate::models::{SettlementOutcome, SettlementRequest, WorkLog};

use super::request::WorkLogSummaryRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settlement", post(settlement_handler))
        .route("/work-logs/summary", post(work_log_summary_handler))
        .with_state(state)
}

/// Handler for POST /settlement endpoint.
///
/// Returns 200 with a success outcome, or 422 with an error outcome when the
/// request is rejected. A request without a `statutory` block uses the
/// configured rates.
async fn settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let mut request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };
    if request.statutory.is_none() {
        request.statutory = Some(*state.config().statutory());
    }

    let today = state.clock().today();
    let start_time = Instant::now();
    let result = calculate_settlement(&request, today);
    let duration = start_time.elapsed();

    let status = match &result {
        Ok(settlement) => {
            info!(
                correlation_id = %correlation_id,
                worker_type = %request.worker_type,
                gross_pay = %settlement.gross_pay,
                net_pay = %settlement.net_pay,
                duration_us = duration.as_micros(),
                "Settlement calculated"
            );
            StatusCode::OK
        }
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                worker_type = %request.worker_type,
                error = %rejection,
                duration_us = duration.as_micros(),
                "Settlement rejected"
            );
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(SettlementOutcome::from(result)),
    )
        .into_response()
}

/// Handler for POST /work-logs/summary endpoint.
///
/// Summarizes one worker's logs against the configured holiday calendar.
async fn work_log_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkLogSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work log summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    if request.start_date > request.end_date {
        warn!(
            correlation_id = %correlation_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            "Invalid summary period"
        );
        return ApiErrorResponse::bad_request(ApiError::invalid_period(
            request.start_date,
            request.end_date,
        ))
        .into_response();
    }

    let logs: Vec<WorkLog> = request.work_logs.into_iter().map(Into::into).collect();
    let summary = match summarize_work_logs(
        &logs,
        request.worker_id,
        request.start_date,
        request.end_date,
        &state.config().calendar(),
    ) {
        Ok(summary) => summary,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                worker_id = request.worker_id,
                error = %rejection,
                "Work log summary rejected"
            );
            return ApiErrorResponse::unprocessable(ApiError::amount_overflow(rejection))
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        worker_id = summary.worker_id,
        logs_received = logs.len(),
        logs_matched = summary.log_count,
        days_worked = summary.days_worked,
        "Work log summary completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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

    ApiErrorResponse::bad_request(error).into_response()
}
