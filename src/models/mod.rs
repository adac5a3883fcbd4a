//! Core data models for the Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod settlement;
mod settlement_request;
mod work_log;
mod worker_type;

pub use settlement::{
    CalculationDetails, ContributionLine, Settlement, SettlementBreakdown, SettlementOutcome,
    StatutoryContributions,
};
pub use settlement_request::{Contribution, SettlementRequest, StatutoryConfig};
pub use work_log::WorkLog;
pub use worker_type::{UnknownWorkerType, WorkerType};
