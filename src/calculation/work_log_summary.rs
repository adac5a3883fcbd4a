//! Work-log aggregation over a working-day calendar.
//!
//! Raw work logs are recorded per worker, customer and day. Before a
//! settlement can be calculated they are summarized for one worker over one
//! period: only working days (Monday to Friday, excluding configured public
//! holidays) count.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Rejection;
use crate::models::{SettlementRequest, StatutoryConfig, WorkLog, WorkerType};

use super::validation::DATE_FORMAT;

/// Business-day calendar with a set of public holidays.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::WorkingCalendar;
/// use chrono::NaiveDate;
///
/// let malaysia_day = NaiveDate::from_ymd_opt(2025, 9, 16).unwrap();
/// let calendar = WorkingCalendar::new([malaysia_day]);
///
/// assert!(!calendar.is_working_day(malaysia_day)); // Tuesday, but a holiday
/// assert!(calendar.is_working_day(NaiveDate::from_ymd_opt(2025, 9, 17).unwrap()));
/// assert!(!calendar.is_working_day(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap())); // Saturday
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl WorkingCalendar {
    /// Creates a calendar that excludes the given holidays.
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns true if `date` is a configured public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns true if `date` is a weekday that is not a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// Lists the working days from `start` to `end`, inclusive.
    ///
    /// Returns an empty list when `start` is after `end`.
    pub fn working_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| self.is_working_day(*date))
            .collect()
    }
}

/// One worker's production over a period, ready to feed a settlement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogSummary {
    /// The worker summarized.
    pub worker_id: u64,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Working days available in the period.
    pub working_days_in_period: u32,
    /// Logs that matched the worker, period and calendar.
    pub log_count: usize,
    /// Distinct working days with at least one log.
    pub days_worked: u32,
    /// Sum of logged quantities.
    pub units_produced: Decimal,
    /// Sum of `quantity * rate` across logs.
    pub earnings: Decimal,
    /// Earliest matching log date.
    pub first_log_date: Option<NaiveDate>,
    /// Latest matching log date.
    pub last_log_date: Option<NaiveDate>,
}

impl WorkLogSummary {
    /// Quantity-weighted average rate, or zero when nothing was produced.
    pub fn average_rate(&self) -> Result<Decimal, Rejection> {
        if self.units_produced.is_zero() {
            return Ok(Decimal::ZERO);
        }
        self.earnings
            .checked_div(self.units_produced)
            .ok_or(Rejection::AmountOverflow)
    }

    /// Builds a PIECE request paying the summarized units at their average rate.
    pub fn piece_request(
        &self,
        statutory: StatutoryConfig,
    ) -> Result<SettlementRequest, Rejection> {
        Ok(SettlementRequest {
            units_produced: self.units_produced,
            piece_rate: self.average_rate()?,
            ..self.base_request(WorkerType::Piece, statutory)
        })
    }

    /// Builds a FIXED request prorating `base_salary` by the days worked.
    pub fn fixed_request(
        &self,
        base_salary: Decimal,
        statutory: StatutoryConfig,
    ) -> SettlementRequest {
        SettlementRequest {
            quantity_worked: Decimal::from(self.days_worked),
            base_salary,
            ..self.base_request(WorkerType::Fixed, statutory)
        }
    }

    fn base_request(
        &self,
        worker_type: WorkerType,
        statutory: StatutoryConfig,
    ) -> SettlementRequest {
        SettlementRequest {
            worker_type: worker_type.code().to_string(),
            settlement_start_date: self.start_date.format(DATE_FORMAT).to_string(),
            settlement_end_date: self.end_date.format(DATE_FORMAT).to_string(),
            statutory: Some(statutory),
            ..SettlementRequest::default()
        }
    }
}

/// Summarizes one worker's logs over `start..=end`, counting working days only.
///
/// Logs for other workers, outside the period, or on weekends and holidays
/// are ignored. Totals that do not fit in a `Decimal` are rejected with
/// [`Rejection::AmountOverflow`].
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{WorkingCalendar, summarize_work_logs};
/// use settlement_engine::models::WorkLog;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
/// let log = |d: u32, quantity: i64| WorkLog {
///     worker_id: 1,
///     customer_id: 9,
///     log_date: day(d),
///     quantity: Decimal::from(quantity),
///     rate: Decimal::from(40),
/// };
/// let logs = vec![log(3, 2), log(3, 1), log(4, 3), log(8, 5)]; // 8th is a Saturday
///
/// let summary =
///     summarize_work_logs(&logs, 1, day(1), day(30), &WorkingCalendar::default()).unwrap();
/// assert_eq!(summary.days_worked, 2);
/// assert_eq!(summary.units_produced, Decimal::from(6));
/// assert_eq!(summary.earnings, Decimal::from(240));
/// ```
pub fn summarize_work_logs(
    logs: &[WorkLog],
    worker_id: u64,
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkingCalendar,
) -> Result<WorkLogSummary, Rejection> {
    let matching: Vec<&WorkLog> = logs
        .iter()
        .filter(|log| log.worker_id == worker_id)
        .filter(|log| log.log_date >= start && log.log_date <= end)
        .filter(|log| calendar.is_working_day(log.log_date))
        .collect();

    let dates: BTreeSet<NaiveDate> = matching.iter().map(|log| log.log_date).collect();

    let mut units_produced = Decimal::ZERO;
    let mut earnings = Decimal::ZERO;
    for log in &matching {
        units_produced = units_produced
            .checked_add(log.quantity)
            .ok_or(Rejection::AmountOverflow)?;
        earnings = log
            .amount()
            .and_then(|amount| earnings.checked_add(amount))
            .ok_or(Rejection::AmountOverflow)?;
    }

    Ok(WorkLogSummary {
        worker_id,
        start_date: start,
        end_date: end,
        working_days_in_period: calendar.working_days(start, end).len() as u32,
        log_count: matching.len(),
        days_worked: dates.len() as u32,
        units_produced,
        earnings,
        first_log_date: dates.first().copied(),
        last_log_date: dates.last().copied(),
    })
}
