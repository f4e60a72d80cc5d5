//! Application configuration structures.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::ProductSelectors;

/// Root application configuration.
///
/// Loaded once per run and passed by reference into every component.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Product page URLs, checked in order
    #[serde(rename = "book_urls")]
    pub targets: Vec<String>,

    /// Outgoing mail server settings
    pub smtp: SmtpConfig,

    /// Addresses that receive the report
    #[serde(rename = "email_recipients")]
    pub recipients: Vec<String>,

    /// Review scores below this are flagged
    #[serde(rename = "min_review_score")]
    pub min_score: f64,

    /// Send the report even when nothing is wrong
    #[serde(default)]
    pub send_daily_report: bool,

    /// HTTP and pacing behavior
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Page lookups
    #[serde(default)]
    pub selectors: ProductSelectors,
}

/// Config file names tried in `dir` when no path is given.
const DEFAULT_FILE_NAMES: [&str; 2] = ["config.toml", "config.json"];

impl Config {
    /// Pick the config file in `dir`: `config.toml`, else an existing
    /// `config.json`. Falls back to `config.toml` so the load error names it.
    pub fn default_path(dir: &Path) -> PathBuf {
        DEFAULT_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| dir.join(DEFAULT_FILE_NAMES[0]))
    }

    /// Load configuration from a file.
    ///
    /// `.json` files are read as JSON, everything else as TOML. Any failure
    /// (missing file, malformed document, missing required key, failed
    /// validation) is reported as [`AppError::Config`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        let config =
            parsed.map_err(|e| AppError::config(format!("invalid {}: {e}", path.display())))?;
        config.validate()?;

        log::debug!(
            "Loaded {} targets and {} recipients from {}",
            config.targets.len(),
            config.recipients.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the values a run cannot do without.
    pub fn validate(&self) -> Result<()> {
        if self.smtp.host.trim().is_empty() {
            return Err(AppError::config("smtp.server is empty"));
        }
        if self.smtp.port == 0 {
            return Err(AppError::config("smtp.port must be > 0"));
        }
        if self.recipients.is_empty() {
            return Err(AppError::config("No email_recipients defined"));
        }
        if self.monitor.user_agent.trim().is_empty() {
            return Err(AppError::config("monitor.user_agent is empty"));
        }
        Ok(())
    }
}

/// SMTP server and login.
#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(rename = "server")]
    pub host: String,

    pub port: u16,

    /// Login name, also used as the sender address
    #[serde(rename = "email")]
    pub account: String,

    #[serde(rename = "password")]
    pub secret: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("account", &self.account)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// HTTP, pacing and report wording.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// User-Agent header for page requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Pause between two targets in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Prefix for the email subject and report heading
    #[serde(default = "defaults::report_title")]
    pub report_title: String,
}

impl MonitorConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            request_delay_ms: defaults::request_delay(),
            report_title: defaults::report_title(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn request_delay() -> u64 {
        2000
    }
    pub fn report_title() -> String {
        "Book Status".into()
    }
}
