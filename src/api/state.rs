//! Application state for the Settlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{Clock, SystemClock};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the clock used to decide whether a
/// settlement period lies in the future.
#[derive(Clone)]
pub struct AppState {
    /// The loaded settlement configuration.
    config: Arc<ConfigLoader>,
    /// Source of the evaluation date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state that reads the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
