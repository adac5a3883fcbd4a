//! Pre-calculation validation of settlement requests.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. both period dates parse as `YYYY-MM-DD`
//! 2. start is not after today, end is not after today, start is not after end
//! 3. the zero-input and rate checks for the request's own worker type
//! 4. the worker type is recognized
//!
//! An unrecognized worker type skips step 3 entirely and is only rejected
//! at step 4.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Rejection;
use crate::models::{SettlementRequest, WorkerType};

/// Date format accepted for settlement period bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A request that passed validation, with its dates and worker type parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// The worker classification.
    pub worker_type: WorkerType,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ValidatedRequest {
    /// Calendar days in the period, counting both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::calculation::ValidatedRequest;
    /// use settlement_engine::models::WorkerType;
    /// use chrono::NaiveDate;
    ///
    /// let validated = ValidatedRequest {
    ///     worker_type: WorkerType::Fixed,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
    /// };
    /// assert_eq!(validated.total_days_in_period(), 22);
    /// ```
    pub fn total_days_in_period(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Validates a settlement request against the evaluation date `today`.
///
/// # Returns
///
/// The parsed worker type and period on success, or the first
/// [`Rejection`] encountered.
pub fn validate_request(
    request: &SettlementRequest,
    today: NaiveDate,
) -> Result<ValidatedRequest, Rejection> {
    let (start_date, end_date) = parse_period(request)?;
    check_period(start_date, end_date, today)?;

    let worker_type = request.worker_type.parse::<WorkerType>().ok();
    if let Some(worker_type) = worker_type {
        check_inputs(worker_type, request)?;
    }

    let worker_type = worker_type.ok_or_else(|| Rejection::InvalidWorkerType {
        worker_type: request.worker_type.clone(),
    })?;

    Ok(ValidatedRequest {
        worker_type,
        start_date,
        end_date,
    })
}

fn parse_period(request: &SettlementRequest) -> Result<(NaiveDate, NaiveDate), Rejection> {
    let parse = |value: &str| {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|source| Rejection::InvalidDateFormat { source })
    };
    let start_date = parse(&request.settlement_start_date)?;
    let end_date = parse(&request.settlement_end_date)?;
    Ok((start_date, end_date))
}

fn check_period(
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), Rejection> {
    if start_date > today {
        return Err(Rejection::StartDateInFuture);
    }
    if end_date > today {
        return Err(Rejection::EndDateInFuture);
    }
    if start_date > end_date {
        return Err(Rejection::StartAfterEnd);
    }
    Ok(())
}

fn check_inputs(worker_type: WorkerType, request: &SettlementRequest) -> Result<(), Rejection> {
    // (quantity that must be non-zero, rejection, rate that must be positive, rejection)
    let (quantity, no_quantity, rate, bad_rate) = match worker_type {
        WorkerType::Fixed => (
            request.quantity_worked,
            Rejection::NoValidWorkingHours,
            request.base_salary,
            Rejection::NonPositiveBaseSalary,
        ),
        WorkerType::Piece => (
            request.units_produced,
            Rejection::ZeroProduction,
            request.piece_rate,
            Rejection::NonPositivePieceRate,
        ),
        WorkerType::Hourly => (
            request.quantity_worked,
            Rejection::NoHoursRecorded,
            request.hourly_rate,
            Rejection::NonPositiveHourlyRate,
        ),
        WorkerType::Daily => (
            request.quantity_worked,
            Rejection::NoDaysRecorded,
            request.daily_rate,
            Rejection::NonPositiveDailyRate,
        ),
    };

    if quantity.is_zero() {
        return Err(no_quantity);
    }
    if rate <= Decimal::ZERO {
        return Err(bad_rate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 22).unwrap()
    }

    fn request(worker_type: &str, start: &str, end: &str) -> SettlementRequest {
        SettlementRequest {
            worker_type: worker_type.to_string(),
            settlement_start_date: start.to_string(),
            settlement_end_date: end.to_string(),
            quantity_worked: dec("20"),
            units_produced: dec("150.5"),
            hourly_rate: dec("12.50"),
            daily_rate: dec("80"),
            piece_rate: dec("45"),
            base_salary: dec("3000"),
            ..SettlementRequest::default()
        }
    }

    #[test]
    fn test_valid_request_parses_dates_and_type() {
        let validated =
            validate_request(&request("HOURLY", "2025-11-01", "2025-11-22"), today()).unwrap();
        assert_eq!(validated.worker_type, WorkerType::Hourly);
        assert_eq!(validated.start_date, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(validated.end_date, today());
        assert_eq!(validated.total_days_in_period(), 22);
    }

    #[test]
    fn test_single_day_period() {
        let validated =
            validate_request(&request("DAILY", "2025-11-22", "2025-11-22"), today()).unwrap();
        assert_eq!(validated.total_days_in_period(), 1);
    }

    #[test]
    fn test_malformed_start_date() {
        let result = validate_request(&request("FIXED", "01/11/2025", "2025-11-22"), today());
        assert!(matches!(result, Err(Rejection::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_malformed_end_date_wins_over_future_start() {
        let result = validate_request(&request("FIXED", "2030-01-01", "2025-02-30"), today());
        assert!(matches!(result, Err(Rejection::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_future_start_wins_over_future_end() {
        let result = validate_request(&request("FIXED", "2026-01-01", "2026-01-31"), today());
        assert_eq!(result, Err(Rejection::StartDateInFuture));
    }

    #[test]
    fn test_future_end() {
        let result = validate_request(&request("FIXED", "2025-11-01", "2025-11-23"), today());
        assert_eq!(result, Err(Rejection::EndDateInFuture));
    }

    #[test]
    fn test_future_start_wins_over_bad_ordering() {
        let result = validate_request(&request("FIXED", "2025-11-23", "2025-11-01"), today());
        assert_eq!(result, Err(Rejection::StartDateInFuture));
    }

    #[test]
    fn test_start_after_end() {
        let result = validate_request(&request("FIXED", "2025-11-22", "2025-11-01"), today());
        assert_eq!(result, Err(Rejection::StartAfterEnd));
    }

    #[test]
    fn test_period_checks_run_before_worker_type() {
        let result = validate_request(&request("CONTRACT", "2025-11-22", "2025-11-01"), today());
        assert_eq!(result, Err(Rejection::StartAfterEnd));
    }

    #[test]
    fn test_fixed_zero_days() {
        let mut req = request("FIXED", "2025-11-01", "2025-11-22");
        req.quantity_worked = Decimal::ZERO;
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NoValidWorkingHours)
        );
    }

    #[test]
    fn test_fixed_zero_days_checked_before_salary() {
        let mut req = request("FIXED", "2025-11-01", "2025-11-22");
        req.quantity_worked = Decimal::ZERO;
        req.base_salary = Decimal::ZERO;
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NoValidWorkingHours)
        );
    }

    #[test]
    fn test_fixed_negative_salary() {
        let mut req = request("FIXED", "2025-11-01", "2025-11-22");
        req.base_salary = dec("-1");
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NonPositiveBaseSalary)
        );
    }

    #[test]
    fn test_piece_zero_production() {
        let mut req = request("PIECE", "2025-11-01", "2025-11-22");
        req.units_produced = Decimal::ZERO;
        assert_eq!(validate_request(&req, today()), Err(Rejection::ZeroProduction));
    }

    #[test]
    fn test_piece_negative_production_passes() {
        let mut req = request("PIECE", "2025-11-01", "2025-11-22");
        req.units_produced = dec("-3");
        assert!(validate_request(&req, today()).is_ok());
    }

    #[test]
    fn test_piece_zero_rate() {
        let mut req = request("PIECE", "2025-11-01", "2025-11-22");
        req.piece_rate = Decimal::ZERO;
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NonPositivePieceRate)
        );
    }

    #[test]
    fn test_piece_ignores_quantity_worked() {
        let mut req = request("PIECE", "2025-11-01", "2025-11-22");
        req.quantity_worked = Decimal::ZERO;
        assert!(validate_request(&req, today()).is_ok());
    }

    #[test]
    fn test_hourly_checks() {
        let mut req = request("HOURLY", "2025-11-01", "2025-11-22");
        req.quantity_worked = Decimal::ZERO;
        assert_eq!(validate_request(&req, today()), Err(Rejection::NoHoursRecorded));

        let mut req = request("HOURLY", "2025-11-01", "2025-11-22");
        req.hourly_rate = Decimal::ZERO;
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NonPositiveHourlyRate)
        );
    }

    #[test]
    fn test_daily_checks() {
        let mut req = request("DAILY", "2025-11-01", "2025-11-22");
        req.quantity_worked = Decimal::ZERO;
        assert_eq!(validate_request(&req, today()), Err(Rejection::NoDaysRecorded));

        let mut req = request("DAILY", "2025-11-01", "2025-11-22");
        req.daily_rate = dec("-80");
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::NonPositiveDailyRate)
        );
    }

    #[test]
    fn test_other_types_rates_are_not_checked() {
        let mut req = request("DAILY", "2025-11-01", "2025-11-22");
        req.base_salary = Decimal::ZERO;
        req.piece_rate = Decimal::ZERO;
        req.hourly_rate = Decimal::ZERO;
        assert!(validate_request(&req, today()).is_ok());
    }

    #[test]
    fn test_unknown_worker_type_skips_input_checks() {
        let req = SettlementRequest {
            worker_type: "CONTRACT".to_string(),
            settlement_start_date: "2025-11-01".to_string(),
            settlement_end_date: "2025-11-22".to_string(),
            ..SettlementRequest::default()
        };
        assert_eq!(
            validate_request(&req, today()),
            Err(Rejection::InvalidWorkerType {
                worker_type: "CONTRACT".to_string()
            })
        );
    }
}
