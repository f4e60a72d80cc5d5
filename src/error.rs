// src/error.rs

//! Unified error handling for the monitor.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// `Config` and `Send` abort a run. `Fetch` and `Selector` are per-item and
/// end up rendered inside the report instead of propagating.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration missing, malformed or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page fetch failed. Displays the underlying message unchanged.
    #[error("{message}")]
    Fetch { url: String, message: String },

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Notification could not be built or delivered
    #[error("Send error: {0}")]
    Send(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error for `url`.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a notification error.
    pub fn send(message: impl fmt::Display) -> Self {
        Self::Send(message.to_string())
    }
}

/// Render an error and every `source()` below it, joined with ": ".
///
/// Client errors often keep the useful part ("Connection refused") only in
/// their sources.
pub fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
