//! Client configuration sourced by the embedding application.

use std::time::Duration;

use crate::rest::endpoints::OKX_BASE_URL;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the entrypoint URL.
pub const ENTRYPOINT_URL_VAR: &str = "OKX_ENTRYPOINT_URL";
/// Environment variable holding the proxy string.
pub const PROXY_VAR: &str = "OKX_PROXY";
/// Environment variable enabling demo trading when set to `1`.
pub const SIMULATED_TRADING_VAR: &str = "OKX_SIMULATED_TRADING";

/// Connection settings for [`OkxRestClient`](crate::rest::OkxRestClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base REST host, e.g. `https://www.okx.com`
    pub entrypoint_url: String,
    /// Optional HTTP or SOCKS5 proxy, see [`ProxyConfig`](crate::rest::ProxyConfig)
    pub proxy: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Send `x-simulated-trading: 1` to use the demo trading environment
    pub simulated_trading: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            entrypoint_url: OKX_BASE_URL.to_string(),
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            simulated_trading: false,
        }
    }
}

impl ClientConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `OKX_ENTRYPOINT_URL`, `OKX_PROXY` and `OKX_SIMULATED_TRADING`.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Self {
        let non_empty = |var: &str| std::env::var(var).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            entrypoint_url: non_empty(ENTRYPOINT_URL_VAR).unwrap_or(defaults.entrypoint_url),
            proxy: non_empty(PROXY_VAR),
            timeout: defaults.timeout,
            simulated_trading: non_empty(SIMULATED_TRADING_VAR).as_deref() == Some("1"),
        }
    }

    /// Set the entrypoint URL.
    pub fn with_entrypoint_url(mut self, url: impl Into<String>) -> Self {
        self.entrypoint_url = url.into();
        self
    }

    /// Set the proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.entrypoint_url, "https://www.okx.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.proxy.is_none());
        assert!(!config.simulated_trading);
    }

    #[test]
    fn test_config_setters() {
        let config = ClientConfig::new()
            .with_entrypoint_url("http://127.0.0.1:9000")
            .with_proxy("10.0.0.1:3128")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.entrypoint_url, "http://127.0.0.1:9000");
        assert_eq!(config.proxy.as_deref(), Some("10.0.0.1:3128"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
