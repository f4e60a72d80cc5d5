// src/utils/http.rs

//! HTTP client utilities.

use reqwest::blocking::Client;

use crate::error::{AppError, Result, error_chain};
use crate::models::MonitorConfig;

/// Create a blocking HTTP client that identifies itself with the configured
/// User-Agent. Timeouts are left at the library defaults.
pub fn create_client(config: &MonitorConfig) -> Result<Client> {
    let client = Client::builder().user_agent(&config.user_agent).build()?;
    Ok(client)
}

/// Fetch a page body as text.
///
/// Network failures and non-2xx statuses become [`AppError::Fetch`] carrying
/// the client's message together with its underlying causes.
pub fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| AppError::fetch(url, error_chain(&e)))?;

    response
        .text()
        .map_err(|e| AppError::fetch(url, error_chain(&e)))
}
