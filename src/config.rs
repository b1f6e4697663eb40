//! Chat service endpoint configuration.

use crate::api::CHAT_PATH;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Where the chat service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    base_url: String,
    pub timeouts: Timeouts,
}

impl ChatConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is `http(s)://`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned(), timeouts: Timeouts::default() })
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe target (service root).
    pub fn probe_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn chat_url(&self) -> String {
        format!("{}{CHAT_PATH}", self.base_url)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
