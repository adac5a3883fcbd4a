//! Request types for the Settlement Engine API.
//!
//! The `/settlement` endpoint accepts a [`SettlementRequest`] directly; this
//! module defines the request structures for `/work-logs/summary`.
//!
//! [`SettlementRequest`]: crate::models::SettlementRequest

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WorkLog;

/// Request body for the `/work-logs/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogSummaryRequest {
    /// The worker to summarize.
    pub worker_id: u64,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Raw work logs; may include other workers and dates.
    #[serde(default)]
    pub work_logs: Vec<WorkLogRequest>,
}

/// A raw work log in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogRequest {
    /// The worker who produced the quantity.
    pub worker_id: u64,
    /// The customer the work was done for.
    pub customer_id: u64,
    /// The date of the work.
    pub log_date: NaiveDate,
    /// Units produced.
    pub quantity: Decimal,
    /// Rate per unit.
    pub rate: Decimal,
}

impl From<WorkLogRequest> for WorkLog {
    fn from(req: WorkLogRequest) -> Self {
        WorkLog {
            worker_id: req.worker_id,
            customer_id: req.customer_id,
            log_date: req.log_date,
            quantity: req.quantity,
            rate: req.rate,
        }
    }
}
