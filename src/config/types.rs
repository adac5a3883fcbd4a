//! Configuration types for the Settlement Engine.
//!
//! This module contains the data structures that represent the YAML
//! configuration files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::WorkingCalendar;
use crate::models::StatutoryConfig;

/// A public holiday that is not a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Malaysia Day").
    pub name: String,
}

/// Holiday configuration from holidays.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Holidays in no particular order.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

/// The complete settlement configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    /// Default statutory contributions.
    statutory: StatutoryConfig,
    /// Public holidays (sorted by date).
    holidays: Vec<PublicHoliday>,
}

impl SettlementConfig {
    /// Creates a new SettlementConfig from its component parts.
    pub fn new(statutory: StatutoryConfig, holidays: Vec<PublicHoliday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            statutory,
            holidays: sorted_holidays,
        }
    }

    /// Returns the default statutory contributions.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Returns all public holidays, oldest first.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Builds a working-day calendar excluding the configured holidays.
    pub fn calendar(&self) -> WorkingCalendar {
        WorkingCalendar::new(self.holidays.iter().map(|h| h.date))
    }
}
