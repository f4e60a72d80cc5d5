// src/services/fetcher.rs

//! Page fetcher service.

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::MonitorConfig;
use crate::utils::http;

/// Source of raw page markup.
pub trait PageFetcher {
    /// Fetch the markup at `url`. One attempt, no retries.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP with a fixed User-Agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        http::fetch_text(&self.client, url)
    }
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}
