//! Settlement result models.
//!
//! This module contains the [`Settlement`] produced by a successful
//! calculation, the per-worker-type [`CalculationDetails`], and the
//! [`SettlementOutcome`] wire shape that carries either a settlement or a
//! rejection message.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Rejection;

/// How gross pay was derived, one case per worker type.
///
/// Serialized with a `worker_type` tag naming the formula used.
///
/// # Example
///
/// ```
/// use settlement_engine::models::CalculationDetails;
/// use rust_decimal::Decimal;
///
/// let details = CalculationDetails::Daily {
///     days_worked: Decimal::from(10),
///     daily_rate: Decimal::from(80),
///     calculated_pay: Decimal::from(800),
/// };
/// let json = serde_json::to_value(&details).unwrap();
/// assert_eq!(json["worker_type"], "Daily Rate");
/// assert_eq!(details.base_pay(), Decimal::from(800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "worker_type")]
pub enum CalculationDetails {
    /// Fixed salary prorated over the days in the period.
    #[serde(rename = "Fixed Salary")]
    Fixed {
        /// Salary for a full period.
        base_salary: Decimal,
        /// Days actually worked.
        days_worked: Decimal,
        /// Calendar days in the period, inclusive of both ends.
        total_days_in_period: i64,
        /// `base_salary / total_days_in_period * days_worked`.
        prorated_salary: Decimal,
    },
    /// Units produced at a piece rate.
    #[serde(rename = "Piece Rate")]
    Piece {
        /// Units produced in the period.
        total_units_produced: Decimal,
        /// Rate per unit.
        piece_rate: Decimal,
        /// `total_units_produced * piece_rate`.
        calculated_pay: Decimal,
    },
    /// Hours worked at an hourly rate.
    #[serde(rename = "Hourly Rate")]
    Hourly {
        /// Hours worked in the period.
        hours_worked: Decimal,
        /// Rate per hour.
        hourly_rate: Decimal,
        /// `hours_worked * hourly_rate`.
        calculated_pay: Decimal,
    },
    /// Days worked at a daily rate.
    #[serde(rename = "Daily Rate")]
    Daily {
        /// Days worked in the period.
        days_worked: Decimal,
        /// Rate per day.
        daily_rate: Decimal,
        /// `days_worked * daily_rate`.
        calculated_pay: Decimal,
    },
}

impl CalculationDetails {
    /// Returns the pay produced by the formula, before allowances.
    pub fn base_pay(&self) -> Decimal {
        match self {
            CalculationDetails::Fixed {
                prorated_salary, ..
            } => *prorated_salary,
            CalculationDetails::Piece { calculated_pay, .. }
            | CalculationDetails::Hourly { calculated_pay, .. }
            | CalculationDetails::Daily { calculated_pay, .. } => *calculated_pay,
        }
    }

    /// Returns a copy with every monetary field passed through `round`.
    ///
    /// Quantities (days, hours, units) are left untouched.
    pub(crate) fn map_money(&self, round: impl Fn(Decimal) -> Decimal) -> Self {
        match self {
            CalculationDetails::Fixed {
                base_salary,
                days_worked,
                total_days_in_period,
                prorated_salary,
            } => CalculationDetails::Fixed {
                base_salary: round(*base_salary),
                days_worked: *days_worked,
                total_days_in_period: *total_days_in_period,
                prorated_salary: round(*prorated_salary),
            },
            CalculationDetails::Piece {
                total_units_produced,
                piece_rate,
                calculated_pay,
            } => CalculationDetails::Piece {
                total_units_produced: *total_units_produced,
                piece_rate: round(*piece_rate),
                calculated_pay: round(*calculated_pay),
            },
            CalculationDetails::Hourly {
                hours_worked,
                hourly_rate,
                calculated_pay,
            } => CalculationDetails::Hourly {
                hours_worked: *hours_worked,
                hourly_rate: round(*hourly_rate),
                calculated_pay: round(*calculated_pay),
            },
            CalculationDetails::Daily {
                days_worked,
                daily_rate,
                calculated_pay,
            } => CalculationDetails::Daily {
                days_worked: *days_worked,
                daily_rate: round(*daily_rate),
                calculated_pay: round(*calculated_pay),
            },
        }
    }
}

/// A statutory contribution as reported in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// The configured rate as a percentage, e.g. `"11%"`.
    ///
    /// Trailing zeros are dropped, so 0.11 renders as `"11%"` where legacy
    /// clients printed `"11.0%"`. Compare labels by value, not by text.
    pub rate: String,
    /// The amount deducted.
    pub amount: Decimal,
}

/// The three statutory contributions with their rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// Employees Provident Fund.
    pub epf: ContributionLine,
    /// Social Security Organisation contribution.
    pub socso: ContributionLine,
    /// Employment Insurance System contribution.
    pub eis: ContributionLine,
}

/// Nested view of how the settlement was put together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    /// Same record as [`Settlement::calculation_details`].
    pub base_calculation: CalculationDetails,
    /// Statutory contributions with rates.
    pub statutory_contributions: StatutoryContributions,
}

/// A completed settlement. Every monetary field is rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Base pay plus allowances.
    pub gross_pay: Decimal,
    /// Allowances included in gross pay.
    pub allowances: Decimal,
    /// EPF employee contribution.
    pub epf_employee: Decimal,
    /// SOCSO employee contribution.
    pub socso_employee: Decimal,
    /// EIS employee contribution.
    pub eis_employee: Decimal,
    /// Non-statutory deductions.
    pub other_deductions: Decimal,
    /// Statutory contributions plus other deductions.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions; never negative.
    pub net_pay: Decimal,
    /// Human-readable period, `"<start> to <end>"`.
    pub settlement_period: String,
    /// How base pay was derived.
    pub calculation_details: CalculationDetails,
    /// Nested breakdown of base pay and statutory contributions.
    pub breakdown: SettlementBreakdown,
}

/// Wire shape of a settlement call: exactly one of a settlement or a rejection.
///
/// # Example
///
/// ```
/// use settlement_engine::error::Rejection;
/// use settlement_engine::models::SettlementOutcome;
///
/// let outcome = SettlementOutcome::from(Err(Rejection::StartAfterEnd));
/// let json = serde_json::to_value(&outcome).unwrap();
/// assert_eq!(json["status"], "error");
/// assert_eq!(json["message"], "Settlement start date cannot be after end date");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SettlementOutcome {
    /// The settlement was calculated.
    Success(Settlement),
    /// The request was rejected.
    Error {
        /// Why the request was rejected.
        message: String,
    },
}

impl SettlementOutcome {
    /// Returns true if this outcome carries a settlement.
    pub fn is_success(&self) -> bool {
        matches!(self, SettlementOutcome::Success(_))
    }
}

impl From<Result<Settlement, Rejection>> for SettlementOutcome {
    fn from(result: Result<Settlement, Rejection>) -> Self {
        match result {
            Ok(settlement) => SettlementOutcome::Success(settlement),
            Err(rejection) => SettlementOutcome::Error {
                message: rejection.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_details() -> CalculationDetails {
        CalculationDetails::Fixed {
            base_salary: dec("3000.00"),
            days_worked: dec("20"),
            total_days_in_period: 22,
            prorated_salary: dec("2727.27"),
        }
    }

    fn sample_settlement() -> Settlement {
        let line = |rate: &str, amount: &str| ContributionLine {
            rate: rate.to_string(),
            amount: dec(amount),
        };
        Settlement {
            gross_pay: dec("2927.27"),
            allowances: dec("200.00"),
            epf_employee: dec("322.00"),
            socso_employee: dec("14.64"),
            eis_employee: dec("5.85"),
            other_deductions: dec("50.00"),
            total_deductions: dec("392.49"),
            net_pay: dec("2534.78"),
            settlement_period: "2025-11-01 to 2025-11-22".to_string(),
            calculation_details: sample_details(),
            breakdown: SettlementBreakdown {
                base_calculation: sample_details(),
                statutory_contributions: StatutoryContributions {
                    epf: line("11%", "322.00"),
                    socso: line("0.5%", "14.64"),
                    eis: line("0.2%", "5.85"),
                },
            },
        }
    }

    #[test]
    fn test_fixed_details_serialize_with_label() {
        let json = serde_json::to_value(sample_details()).unwrap();
        assert_eq!(json["worker_type"], "Fixed Salary");
        assert_eq!(json["total_days_in_period"], 22);
        assert_eq!(json["prorated_salary"], "2727.27");
    }

    #[test]
    fn test_piece_details_labels() {
        let details = CalculationDetails::Piece {
            total_units_produced: dec("150.5"),
            piece_rate: dec("45.00"),
            calculated_pay: dec("6772.50"),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["worker_type"], "Piece Rate");
        assert_eq!(json["total_units_produced"], "150.5");
        assert_eq!(details.base_pay(), dec("6772.50"));
    }

    #[test]
    fn test_map_money_leaves_quantities() {
        let details = CalculationDetails::Hourly {
            hours_worked: dec("7.125"),
            hourly_rate: dec("12.505"),
            calculated_pay: dec("89.098125"),
        };
        let rounded = details.map_money(|d| d.round_dp(2));
        assert_eq!(
            rounded,
            CalculationDetails::Hourly {
                hours_worked: dec("7.125"),
                hourly_rate: dec("12.50"),
                calculated_pay: dec("89.10"),
            }
        );
    }

    #[test]
    fn test_success_outcome_flattens_settlement() {
        let outcome = SettlementOutcome::from(Ok(sample_settlement()));
        assert!(outcome.is_success());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["net_pay"], "2534.78");
        assert_eq!(json["settlement_period"], "2025-11-01 to 2025-11-22");
        assert_eq!(
            json["breakdown"]["statutory_contributions"]["socso"]["rate"],
            "0.5%"
        );
        assert_eq!(
            json["breakdown"]["base_calculation"],
            json["calculation_details"]
        );
    }

    #[test]
    fn test_outcome_deserializes_back() {
        let outcome = SettlementOutcome::from(Ok(sample_settlement()));
        let json = serde_json::to_string(&outcome).unwrap();
        let parsed: SettlementOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }

    #[test]
    fn test_error_outcome_carries_message() {
        let outcome = SettlementOutcome::from(Err(Rejection::ZeroProduction));
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            SettlementOutcome::Error {
                message: "Total production quantity is zero for piece-rate worker".to_string()
            }
        );
    }
}
