//! Client configuration
//!
//! Loaded from environment variables (a `.env` file is honoured by the binary):
//! - `DIARY_API_BASE_URL` (required): service root, e.g. `https://api.example.com`
//! - `DIARY_API_TIMEOUT_SECS` (optional, default 30): per-request timeout

use std::time::Duration;

use url::Url;

use crate::error::ControllerError;

pub const BASE_URL_VAR: &str = "DIARY_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "DIARY_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ControllerError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ControllerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ControllerError> {
        let base_url = lookup(BASE_URL_VAR).ok_or_else(|| {
            ControllerError::Config(format!("{} environment variable not set", BASE_URL_VAR))
        })?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ControllerError::Config(format!("invalid {} '{}': {}", TIMEOUT_VAR, raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(&base_url)?.with_timeout(Duration::from_secs(timeout_secs)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ControllerError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ControllerError::Config(format!("invalid base url '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ControllerError::Config(format!(
            "base url must be http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}
