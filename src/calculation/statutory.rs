//! Statutory deduction calculation.
//!
//! EPF, SOCSO and EIS are each a percentage of gross pay and are applied
//! independently of one another.

use rust_decimal::Decimal;

use crate::error::Rejection;
use crate::models::{Contribution, StatutoryConfig};

/// Deductions owed on a gross pay figure, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatutoryDeductions {
    /// EPF employee contribution.
    pub epf: Decimal,
    /// SOCSO employee contribution.
    pub socso: Decimal,
    /// EIS employee contribution.
    pub eis: Decimal,
    /// Non-statutory deductions carried through from the request.
    pub other: Decimal,
}

impl StatutoryDeductions {
    /// Sum of statutory contributions and other deductions.
    pub fn total(&self) -> Result<Decimal, Rejection> {
        [self.socso, self.eis, self.other]
            .into_iter()
            .try_fold(self.epf, Decimal::checked_add)
            .ok_or(Rejection::AmountOverflow)
    }
}

/// Applies each enabled contribution in `config` to `gross_pay`.
///
/// Disabled contributions are zero.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_deductions;
/// use settlement_engine::models::StatutoryConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = calculate_deductions(
///     Decimal::from(1000),
///     &StatutoryConfig::default(),
///     Decimal::from(50),
/// )
/// .unwrap();
/// assert_eq!(deductions.epf, Decimal::from(110));
/// assert_eq!(deductions.total().unwrap(), Decimal::from_str("167").unwrap());
/// ```
pub fn calculate_deductions(
    gross_pay: Decimal,
    config: &StatutoryConfig,
    other_deductions: Decimal,
) -> Result<StatutoryDeductions, Rejection> {
    let amount = |contribution: &Contribution| {
        contribution
            .amount_on(gross_pay)
            .ok_or(Rejection::AmountOverflow)
    };

    Ok(StatutoryDeductions {
        epf: amount(&config.epf)?,
        socso: amount(&config.socso)?,
        eis: amount(&config.eis)?,
        other: other_deductions,
    })
}

/// Formats a fractional rate as a percentage string, e.g. `0.005` as `"0.5%"`.
///
/// Trailing zeros are dropped, so `0.11` renders as `"11%"`. `None` when the
/// rate is too large to express as a percentage.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::format_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_rate(Decimal::from_str("0.11").unwrap()).as_deref(), Some("11%"));
/// assert_eq!(format_rate(Decimal::from_str("0.002").unwrap()).as_deref(), Some("0.2%"));
/// assert_eq!(format_rate(Decimal::MAX), None);
/// ```
pub fn format_rate(rate: Decimal) -> Option<String> {
    rate.checked_mul(Decimal::ONE_HUNDRED)
        .map(|percent| format!("{}%", percent.normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rate_label(rate: &str) -> String {
        format_rate(dec(rate)).unwrap()
    }

    #[test]
    fn test_default_rates_total_eleven_point_seven_percent() {
        let deductions =
            calculate_deductions(dec("2000"), &StatutoryConfig::default(), Decimal::ZERO).unwrap();
        assert_eq!(deductions.epf, dec("220"));
        assert_eq!(deductions.socso, dec("10"));
        assert_eq!(deductions.eis, dec("4"));
        assert_eq!(deductions.total(), Ok(dec("234")));
    }

    #[test]
    fn test_each_contribution_toggles_independently() {
        let config = StatutoryConfig {
            socso: StatutoryConfig::default().socso.disable(),
            ..StatutoryConfig::default()
        };
        let deductions = calculate_deductions(dec("2000"), &config, Decimal::ZERO).unwrap();
        assert_eq!(deductions.epf, dec("220"));
        assert_eq!(deductions.socso, Decimal::ZERO);
        assert_eq!(deductions.eis, dec("4"));
    }

    #[test]
    fn test_all_disabled_leaves_only_other_deductions() {
        let deductions =
            calculate_deductions(dec("6772.50"), &StatutoryConfig::none(), dec("25")).unwrap();
        assert_eq!(deductions.total(), Ok(dec("25")));
    }

    #[test]
    fn test_custom_rate() {
        let config = StatutoryConfig {
            epf: Contribution::enabled(dec("0.09")),
            ..StatutoryConfig::none()
        };
        let deductions = calculate_deductions(dec("1000"), &config, Decimal::ZERO).unwrap();
        assert_eq!(deductions.epf, dec("90"));
    }

    #[test]
    fn test_contribution_overflow_rejected() {
        let config = StatutoryConfig {
            epf: Contribution::enabled(dec("2")),
            ..StatutoryConfig::none()
        };
        assert_eq!(
            calculate_deductions(Decimal::MAX, &config, Decimal::ZERO),
            Err(Rejection::AmountOverflow)
        );
    }

    #[test]
    fn test_total_overflow_rejected() {
        let deductions =
            calculate_deductions(dec("100"), &StatutoryConfig::default(), Decimal::MAX).unwrap();
        assert_eq!(deductions.total(), Err(Rejection::AmountOverflow));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(rate_label("0.11"), "11%");
        assert_eq!(rate_label("0.005"), "0.5%");
        assert_eq!(rate_label("0.002"), "0.2%");
        assert_eq!(rate_label("0.0125"), "1.25%");
        assert_eq!(rate_label("0"), "0%");
        assert_eq!(format_rate(Decimal::MAX), None);
    }
}
