//! Final settlement calculation.
//!
//! This module ties validation, base pay and statutory deductions together
//! into [`calculate_settlement`], the single entry point callers use.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::Rejection;
use crate::models::{
    ContributionLine, Settlement, SettlementBreakdown, SettlementRequest, StatutoryContributions,
};

use super::gross_pay::calculate_base_pay;
use super::statutory::{calculate_deductions, format_rate};
use super::validation::validate_request;

/// Decimal places used for every monetary figure in a settlement.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to [`MONEY_DECIMAL_PLACES`], half away from zero.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("14.635").unwrap()).to_string(), "14.64");
/// assert_eq!(round_money(Decimal::from(5)).to_string(), "5.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Calculates a worker's final settlement for a period.
///
/// The request is validated against `today` first; any failed check returns
/// its [`Rejection`] without calculating anything. Otherwise gross pay is
/// base pay plus allowances, each enabled statutory contribution is taken
/// as a percentage of gross pay, and net pay is gross pay less all
/// deductions. A negative net pay is rejected, as is any amount that does
/// not fit in a `Decimal`; the function never panics.
///
/// Arithmetic runs at full precision; monetary fields of the returned
/// [`Settlement`] are rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::models::SettlementRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = SettlementRequest {
///     worker_type: "FIXED".to_string(),
///     settlement_start_date: "2025-11-01".to_string(),
///     settlement_end_date: "2025-11-22".to_string(),
///     quantity_worked: Decimal::from(20),
///     base_salary: Decimal::from_str("3000.00").unwrap(),
///     allowances: Decimal::from_str("200.00").unwrap(),
///     other_deductions: Decimal::from_str("50.00").unwrap(),
///     ..SettlementRequest::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
///
/// let settlement = calculate_settlement(&request, today).unwrap();
/// assert_eq!(settlement.gross_pay, Decimal::from_str("2927.27").unwrap());
/// assert_eq!(settlement.net_pay, Decimal::from_str("2534.78").unwrap());
/// ```
pub fn calculate_settlement(
    request: &SettlementRequest,
    today: NaiveDate,
) -> Result<Settlement, Rejection> {
    let validated = validate_request(request, today)?;
    let statutory = request.statutory_or_default();

    let details = calculate_base_pay(&validated, request)?;
    let gross_pay = details
        .base_pay()
        .checked_add(request.allowances)
        .ok_or(Rejection::AmountOverflow)?;

    let deductions = calculate_deductions(gross_pay, &statutory, request.other_deductions)?;
    let total_deductions = deductions.total()?;
    let net_pay = gross_pay
        .checked_sub(total_deductions)
        .ok_or(Rejection::AmountOverflow)?;

    if net_pay < Decimal::ZERO {
        return Err(Rejection::NegativeNetPay {
            gross_pay: round_money(gross_pay),
            total_deductions: round_money(total_deductions),
        });
    }

    let line = |rate: Decimal, amount: Decimal| -> Result<ContributionLine, Rejection> {
        Ok(ContributionLine {
            rate: format_rate(rate).ok_or(Rejection::AmountOverflow)?,
            amount: round_money(amount),
        })
    };
    let statutory_contributions = StatutoryContributions {
        epf: line(statutory.epf.rate, deductions.epf)?,
        socso: line(statutory.socso.rate, deductions.socso)?,
        eis: line(statutory.eis.rate, deductions.eis)?,
    };
    let calculation_details = details.map_money(round_money);

    Ok(Settlement {
        gross_pay: round_money(gross_pay),
        allowances: round_money(request.allowances),
        epf_employee: round_money(deductions.epf),
        socso_employee: round_money(deductions.socso),
        eis_employee: round_money(deductions.eis),
        other_deductions: round_money(deductions.other),
        total_deductions: round_money(total_deductions),
        net_pay: round_money(net_pay),
        settlement_period: format!(
            "{} to {}",
            request.settlement_start_date, request.settlement_end_date
        ),
        breakdown: SettlementBreakdown {
            base_calculation: calculation_details.clone(),
            statutory_contributions,
        },
        calculation_details,
    })
}
