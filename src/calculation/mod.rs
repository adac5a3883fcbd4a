//! Calculation logic for the Settlement Engine.
//!
//! This module contains request validation, base pay formulas per worker
//! type, statutory deductions, final settlement assembly, and the work-log
//! summary that turns raw production records into settlement inputs.

mod clock;
mod gross_pay;
mod settlement;
mod statutory;
mod validation;
mod work_log_summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use gross_pay::calculate_base_pay;
pub use settlement::{MONEY_DECIMAL_PLACES, calculate_settlement, round_money};
pub use statutory::{StatutoryDeductions, calculate_deductions, format_rate};
pub use validation::{DATE_FORMAT, ValidatedRequest, validate_request};
pub use work_log_summary::{WorkLogSummary, WorkingCalendar, summarize_work_logs};
