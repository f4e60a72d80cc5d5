// src/models/mod.rs

//! Domain models for the monitor.
//!
//! Configuration, per-target results and the aggregated report.

mod config;
mod report;
mod selectors;
mod status;

// Re-export all public types
pub use config::{Config, MonitorConfig, SmtpConfig};
pub use report::Report;
pub use selectors::ProductSelectors;
pub use status::{ERROR_TITLE, ItemCheck, ItemFailure, ItemStatus, UNKNOWN_TITLE};
