//! Error types for the Settlement Engine.
//!
//! Two kinds of failure are kept apart here: [`Rejection`] is the business
//! outcome of a settlement request that failed validation, and
//! [`EngineError`] covers infrastructure problems such as missing or
//! malformed configuration.

use rust_decimal::Decimal;
use thiserror::Error;

/// The reason a settlement request was rejected.
///
/// Every variant renders as the human-readable message returned to callers.
/// Only [`Rejection::InvalidDateFormat`] carries a parser diagnostic; all
/// other messages have fixed wording.
///
/// # Example
///
/// ```
/// use settlement_engine::error::Rejection;
///
/// let rejection = Rejection::ZeroProduction;
/// assert_eq!(
///     rejection.to_string(),
///     "Total production quantity is zero for piece-rate worker"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// A period date did not match `YYYY-MM-DD`.
    #[error("Invalid date format. Please use YYYY-MM-DD format. Error: {source}")]
    InvalidDateFormat {
        /// The underlying chrono parse failure.
        source: chrono::ParseError,
    },

    /// The period starts after the evaluation date.
    #[error("Settlement start date cannot be in the future")]
    StartDateInFuture,

    /// The period ends after the evaluation date.
    #[error("Settlement end date cannot be in the future")]
    EndDateInFuture,

    /// The period start is after its end.
    #[error("Settlement start date cannot be after end date")]
    StartAfterEnd,

    /// A fixed salary worker reported zero days worked.
    #[error("No valid working hours recorded for fixed salary employee")]
    NoValidWorkingHours,

    /// A fixed salary worker has no positive base salary.
    #[error("Base salary must be greater than zero for fixed salary employee")]
    NonPositiveBaseSalary,

    /// A piece-rate worker reported zero production.
    #[error("Total production quantity is zero for piece-rate worker")]
    ZeroProduction,

    /// A piece-rate worker has no positive piece rate.
    #[error("Piece rate must be greater than zero")]
    NonPositivePieceRate,

    /// An hourly worker reported zero hours.
    #[error("No working hours recorded for hourly worker")]
    NoHoursRecorded,

    /// An hourly worker has no positive hourly rate.
    #[error("Hourly rate must be greater than zero")]
    NonPositiveHourlyRate,

    /// A daily-rate worker reported zero days.
    #[error("No working days recorded for daily-rate worker")]
    NoDaysRecorded,

    /// A daily-rate worker has no positive daily rate.
    #[error("Daily rate must be greater than zero")]
    NonPositiveDailyRate,

    /// The worker type is not one of the recognized classifications.
    #[error("Invalid worker type. Must be one of: FIXED, PIECE, HOURLY, DAILY")]
    InvalidWorkerType {
        /// The value that was supplied.
        worker_type: String,
    },

    /// Deductions exceed gross pay.
    #[error("Net pay cannot be negative (Gross: {gross_pay:.2}, Deductions: {total_deductions:.2})")]
    NegativeNetPay {
        /// Gross pay as calculated, including allowances.
        gross_pay: Decimal,
        /// Statutory contributions plus other deductions.
        total_deductions: Decimal,
    },

    /// An intermediate amount does not fit in a `Decimal`.
    #[error("Calculated amount is too large")]
    AmountOverflow,
}

/// Infrastructure errors raised while loading or serving configuration.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was refused.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_invalid_date_format_embeds_parse_error() {
        let source = NaiveDate::parse_from_str("2025-13-01", "%Y-%m-%d").unwrap_err();
        let rejection = Rejection::InvalidDateFormat { source };
        let message = rejection.to_string();
        assert!(message.starts_with("Invalid date format. Please use YYYY-MM-DD format. Error: "));
        assert!(message.ends_with(&source.to_string()));
    }

    #[test]
    fn test_invalid_worker_type_lists_valid_types() {
        let rejection = Rejection::InvalidWorkerType {
            worker_type: "CASUAL".to_string(),
        };
        assert_eq!(
            rejection.to_string(),
            "Invalid worker type. Must be one of: FIXED, PIECE, HOURLY, DAILY"
        );
    }

    #[test]
    fn test_negative_net_pay_formats_two_decimals() {
        let rejection = Rejection::NegativeNetPay {
            gross_pay: Decimal::from_str("100").unwrap(),
            total_deductions: Decimal::from_str("161.7").unwrap(),
        };
        assert_eq!(
            rejection.to_string(),
            "Net pay cannot be negative (Gross: 100.00, Deductions: 161.70)"
        );
    }

    #[test]
    fn test_amount_overflow_message() {
        assert_eq!(
            Rejection::AmountOverflow.to_string(),
            "Calculated amount is too large"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "epf.rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'epf.rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
        assert_send_sync::<Rejection>();
    }
}
