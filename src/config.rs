// src/config.rs
//! Remote service configuration, injected at startup

use anyhow::{Context, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the extraction/analysis service lives and how long to wait for it.
/// The base URL is always supplied by the embedding application, never a
/// compiled-in literal.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("RADAR_SERVICE_URL")
            .context("RADAR_SERVICE_URL environment variable not set")?;

        let timeout_seconds = match std::env::var("RADAR_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .parse()
                .context("RADAR_TIMEOUT_SECONDS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(&base_url).with_timeout(timeout_seconds))
    }
}
