// src/pipeline/mod.rs

mod monitor;

pub use monitor::{RunSummary, check_targets, run_monitor, subject};
