//! # Client configuration
//!
//! [`ClientConfig`] carries the two transport-level settings the HTTP layer
//! needs: the API base path every endpoint hangs off, and the fixed
//! per-request timeout budget. The base path can be overridden at build time
//! through the `API_BASE_URL` environment variable (the deployed bundle is
//! static, so this is a compile-time choice, not a runtime one).
//!
//! All fields carry serde defaults so that a missing or partial configuration
//! is equivalent to the default one.

use serde::{Deserialize, Serialize};

/// Build-time override for the API base path.
/// - Development: `/api` (default, same-origin)
/// - Production: whatever `API_BASE_URL` was set to when the bundle was built
const BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Transport configuration for the API client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base path prefixed to every endpoint, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout budget in seconds. Applied at the transport layer
    /// on native targets; the browser's fetch budget governs on wasm.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given base path.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Builder method to set the timeout budget.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(!config.base_url.is_empty());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://api.example.com/v1".to_string()).with_timeout(30);
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }
}
