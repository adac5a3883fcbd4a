//! Settlement request and statutory contribution configuration.
//!
//! This module defines the [`SettlementRequest`] consumed by the calculator
//! and the [`StatutoryConfig`] describing which statutory deductions apply.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single statutory contribution: a rate of gross pay and whether it applies.
///
/// # Example
///
/// ```
/// use settlement_engine::models::Contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let epf = Contribution::enabled(Decimal::from_str("0.11").unwrap());
/// assert_eq!(
///     epf.amount_on(Decimal::from(1000)),
///     Some(Decimal::from_str("110.00").unwrap())
/// );
/// assert_eq!(epf.disable().amount_on(Decimal::from(1000)), Some(Decimal::ZERO));
/// assert_eq!(Contribution::enabled(Decimal::TWO).amount_on(Decimal::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Fraction of gross pay (e.g. `0.11` for 11%).
    pub rate: Decimal,
    /// Whether the contribution is deducted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Contribution {
    /// Creates an enabled contribution at the given rate.
    pub fn enabled(rate: Decimal) -> Self {
        Self {
            rate,
            enabled: true,
        }
    }

    /// Returns a copy of this contribution that is not deducted.
    pub fn disable(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }

    /// Returns the contribution owed on `gross_pay`, or zero when disabled.
    ///
    /// `None` when the product does not fit in a `Decimal`.
    pub fn amount_on(&self, gross_pay: Decimal) -> Option<Decimal> {
        if self.enabled {
            gross_pay.checked_mul(self.rate)
        } else {
            Some(Decimal::ZERO)
        }
    }
}

/// Employee-side statutory contributions deducted from gross pay.
///
/// Each contribution is applied independently. Defaults are EPF 11%,
/// SOCSO 0.5% and EIS 0.2%, all enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryConfig {
    /// Employees Provident Fund.
    pub epf: Contribution,
    /// Social Security Organisation contribution.
    pub socso: Contribution,
    /// Employment Insurance System contribution.
    pub eis: Contribution,
}

impl StatutoryConfig {
    /// Default EPF employee rate (11%).
    pub const DEFAULT_EPF_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 2);
    /// Default SOCSO employee rate (0.5%).
    pub const DEFAULT_SOCSO_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);
    /// Default EIS employee rate (0.2%).
    pub const DEFAULT_EIS_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 3);

    /// Returns a configuration with every contribution disabled.
    pub fn none() -> Self {
        let defaults = Self::default();
        Self {
            epf: defaults.epf.disable(),
            socso: defaults.socso.disable(),
            eis: defaults.eis.disable(),
        }
    }
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self {
            epf: Contribution::enabled(Self::DEFAULT_EPF_RATE),
            socso: Contribution::enabled(Self::DEFAULT_SOCSO_RATE),
            eis: Contribution::enabled(Self::DEFAULT_EIS_RATE),
        }
    }
}

/// Input to the settlement calculator.
///
/// Dates and worker type are kept as the caller supplied them; they are
/// parsed during validation so that malformed values become rejections.
/// `quantity_worked` means days for FIXED and DAILY workers and hours for
/// HOURLY workers. Numeric fields left out of a JSON body default to zero.
/// Without a `statutory` block the standard rates apply; the HTTP layer
/// fills in the configured rates instead.
///
/// # Example
///
/// ```
/// use settlement_engine::models::SettlementRequest;
/// use rust_decimal::Decimal;
///
/// let request = SettlementRequest {
///     worker_type: "DAILY".to_string(),
///     settlement_start_date: "2025-11-01".to_string(),
///     settlement_end_date: "2025-11-22".to_string(),
///     quantity_worked: Decimal::from(15),
///     daily_rate: Decimal::from(80),
///     ..SettlementRequest::default()
/// };
/// assert!(request.statutory.is_none());
/// assert!(request.statutory_or_default().epf.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Worker classification code (FIXED, PIECE, HOURLY or DAILY).
    pub worker_type: String,
    /// First day of the settlement period, `YYYY-MM-DD`.
    pub settlement_start_date: String,
    /// Last day of the settlement period (inclusive), `YYYY-MM-DD`.
    pub settlement_end_date: String,
    /// Days (FIXED, DAILY) or hours (HOURLY) worked in the period.
    #[serde(default, alias = "days_worked_in_period")]
    pub quantity_worked: Decimal,
    /// Units produced in the period (PIECE).
    #[serde(default, alias = "total_units_produced")]
    pub units_produced: Decimal,
    /// Rate per hour (HOURLY).
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Rate per day (DAILY).
    #[serde(default)]
    pub daily_rate: Decimal,
    /// Rate per unit produced (PIECE).
    #[serde(default)]
    pub piece_rate: Decimal,
    /// Salary for a full period (FIXED).
    #[serde(default)]
    pub base_salary: Decimal,
    /// Allowances added to gross pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Non-statutory deductions subtracted from gross pay.
    #[serde(default, alias = "deductions")]
    pub other_deductions: Decimal,
    /// Statutory contributions to deduct; the standard rates when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statutory: Option<StatutoryConfig>,
}

impl SettlementRequest {
    /// Returns the statutory contributions to apply.
    pub fn statutory_or_default(&self) -> StatutoryConfig {
        self.statutory.unwrap_or_default()
    }
}
