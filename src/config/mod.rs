//! Configuration loading and management for the Settlement Engine.
//!
//! This module loads the default statutory contribution rates and the
//! public holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holidays configured: {}", config.holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, PublicHoliday, SettlementConfig};
