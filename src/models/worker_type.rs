//! Worker classification.
//!
//! The classification selects which compensation formula applies to a
//! settlement. Requests carry it as text so that an unrecognized value can
//! be reported as a rejection rather than a deserialization failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The compensation arrangement a worker is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkerType {
    /// Fixed period salary, prorated by days worked.
    Fixed,
    /// Paid per unit produced.
    Piece,
    /// Paid per hour worked.
    Hourly,
    /// Paid per day worked.
    Daily,
}

impl WorkerType {
    /// All recognized classifications, in the order they are listed to callers.
    pub const ALL: [WorkerType; 4] = [
        WorkerType::Fixed,
        WorkerType::Piece,
        WorkerType::Hourly,
        WorkerType::Daily,
    ];

    /// Returns the wire code for this classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::WorkerType;
    ///
    /// assert_eq!(WorkerType::Piece.code(), "PIECE");
    /// ```
    pub fn code(self) -> &'static str {
        match self {
            WorkerType::Fixed => "FIXED",
            WorkerType::Piece => "PIECE",
            WorkerType::Hourly => "HOURLY",
            WorkerType::Daily => "DAILY",
        }
    }
}

impl fmt::Display for WorkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a worker type code is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkerType(pub String);

impl FromStr for WorkerType {
    type Err = UnknownWorkerType;

    /// Parses an exact, case-sensitive worker type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkerType::ALL
            .into_iter()
            .find(|worker_type| worker_type.code() == s)
            .ok_or_else(|| UnknownWorkerType(s.to_string()))
    }
}
