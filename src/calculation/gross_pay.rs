//! Base pay formulas by worker type.
//!
//! Each worker type has exactly one formula. The result records the inputs
//! used so callers can show how the figure was reached. Amounts are kept at
//! full precision here; rounding happens when the settlement is assembled.

use rust_decimal::Decimal;

use crate::error::Rejection;
use crate::models::{CalculationDetails, SettlementRequest, WorkerType};

use super::validation::ValidatedRequest;

/// Calculates base pay (before allowances) for a validated request.
///
/// Rejects with [`Rejection::AmountOverflow`] when a product does not fit
/// in a `Decimal`.
///
/// | Worker type | Formula |
/// |---|---|
/// | FIXED | `base_salary / total_days_in_period * quantity_worked` |
/// | PIECE | `units_produced * piece_rate` |
/// | HOURLY | `quantity_worked * hourly_rate` |
/// | DAILY | `quantity_worked * daily_rate` |
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{ValidatedRequest, calculate_base_pay};
/// use settlement_engine::models::{SettlementRequest, WorkerType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = SettlementRequest {
///     units_produced: Decimal::from_str("150.5").unwrap(),
///     piece_rate: Decimal::from_str("45.00").unwrap(),
///     ..SettlementRequest::default()
/// };
/// let validated = ValidatedRequest {
///     worker_type: WorkerType::Piece,
///     start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
/// };
///
/// let details = calculate_base_pay(&validated, &request).unwrap();
/// assert_eq!(details.base_pay(), Decimal::from_str("6772.50").unwrap());
/// ```
pub fn calculate_base_pay(
    validated: &ValidatedRequest,
    request: &SettlementRequest,
) -> Result<CalculationDetails, Rejection> {
    let details = match validated.worker_type {
        WorkerType::Fixed => {
            let total_days_in_period = validated.total_days_in_period();
            let prorated_salary = request
                .base_salary
                .checked_div(Decimal::from(total_days_in_period))
                .and_then(|daily_salary| daily_salary.checked_mul(request.quantity_worked))
                .ok_or(Rejection::AmountOverflow)?;
            CalculationDetails::Fixed {
                base_salary: request.base_salary,
                days_worked: request.quantity_worked,
                total_days_in_period,
                prorated_salary,
            }
        }
        WorkerType::Piece => CalculationDetails::Piece {
            total_units_produced: request.units_produced,
            piece_rate: request.piece_rate,
            calculated_pay: checked_product(request.units_produced, request.piece_rate)?,
        },
        WorkerType::Hourly => CalculationDetails::Hourly {
            hours_worked: request.quantity_worked,
            hourly_rate: request.hourly_rate,
            calculated_pay: checked_product(request.quantity_worked, request.hourly_rate)?,
        },
        WorkerType::Daily => CalculationDetails::Daily {
            days_worked: request.quantity_worked,
            daily_rate: request.daily_rate,
            calculated_pay: checked_product(request.quantity_worked, request.daily_rate)?,
        },
    };
    Ok(details)
}

fn checked_product(quantity: Decimal, rate: Decimal) -> Result<Decimal, Rejection> {
    quantity
        .checked_mul(rate)
        .ok_or(Rejection::AmountOverflow)
}
