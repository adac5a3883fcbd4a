//! HTTP API module for the Settlement Engine.
//!
//! This module provides the REST endpoints for computing worker final
//! settlements and summarizing work logs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{WorkLogRequest, WorkLogSummaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
