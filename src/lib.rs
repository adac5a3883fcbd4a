//! Settlement Engine for worker final pay
//!
//! This crate computes a worker's final settlement for a period: gross pay by
//! worker type (fixed salary, piece rate, hourly, daily), EPF, SOCSO and EIS
//! contributions, other deductions and net pay. It also summarizes raw work
//! logs against a public holiday calendar and exposes both over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
