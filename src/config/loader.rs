//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settlement
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::calculation::WorkingCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{Contribution, StatutoryConfig};

use super::types::{HolidaysConfig, PublicHoliday, SettlementConfig};

/// Loads and provides access to settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── statutory.yaml   # EPF, SOCSO and EIS rates and toggles
/// └── holidays.yaml    # Public holidays excluded from working days
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("EPF rate: {}", loader.statutory().epf.rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SettlementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A statutory rate is outside 0 to 1
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryConfig>(&path.join("statutory.yaml"))?;
        Self::validate_statutory(&statutory)?;

        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        let config = SettlementConfig::new(statutory, holidays.holidays);
        info!(
            path = %path.display(),
            holidays = config.holidays().len(),
            "Loaded settlement configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SettlementConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_statutory(statutory: &StatutoryConfig) -> EngineResult<()> {
        let contributions: [(&str, &Contribution); 3] = [
            ("epf", &statutory.epf),
            ("socso", &statutory.socso),
            ("eis", &statutory.eis),
        ];

        for (name, contribution) in contributions {
            if contribution.rate < Decimal::ZERO || contribution.rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: format!("{}.rate", name),
                    message: format!("{} is not between 0 and 1", contribution.rate),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying settlement configuration.
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Returns the default statutory contributions.
    pub fn statutory(&self) -> &StatutoryConfig {
        self.config.statutory()
    }

    /// Returns the configured public holidays, oldest first.
    pub fn holidays(&self) -> &[PublicHoliday] {
        self.config.holidays()
    }

    /// Returns the working-day calendar for the configured holidays.
    pub fn calendar(&self) -> WorkingCalendar {
        self.config.calendar()
    }
}
