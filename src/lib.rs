// src/lib.rs

//! Book monitor library
//!
//! Fetches a fixed list of product pages, extracts stock, secondary-format
//! and review signals, and emails a report when something looks wrong.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
