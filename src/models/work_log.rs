//! Raw work records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's production for a worker at a customer.
///
/// # Example
///
/// ```
/// use settlement_engine::models::WorkLog;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let log = WorkLog {
///     worker_id: 7,
///     customer_id: 3,
///     log_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
///     quantity: Decimal::from_str("2.5").unwrap(),
///     rate: Decimal::from_str("45.00").unwrap(),
/// };
/// assert_eq!(log.amount(), Some(Decimal::from_str("112.50").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLog {
    /// The worker who produced the quantity.
    pub worker_id: u64,
    /// The customer the work was done for.
    pub customer_id: u64,
    /// The calendar date of the work.
    pub log_date: NaiveDate,
    /// Units produced (e.g. tons harvested).
    pub quantity: Decimal,
    /// Rate paid per unit.
    pub rate: Decimal,
}

impl WorkLog {
    /// Returns the earnings for this record (`quantity * rate`).
    ///
    /// `None` when the product does not fit in a `Decimal`.
    pub fn amount(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.rate)
    }
}
