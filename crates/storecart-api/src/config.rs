//! API client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storecart_core::Currency;

/// Configuration for the storefront REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `stock/{id}` and `products/{id}` are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Currency catalog prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl ApiConfig {
    /// Create a config for `base_url` with defaults elsewhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
            currency: Currency::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:3333");
        assert!(config.timeout().is_none());
        assert_eq!(config.currency, Currency::BRL);
    }

    #[test]
    fn test_with_timeout() {
        let config = ApiConfig::new("http://api.test").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout_ms, Some(2000));
        assert_eq!(config.timeout(), Some(Duration::from_secs(2)));
    }
}
