//! Endpoint Configuration
//!
//! Where the analysis service lives. The value is built once and injected
//! into the clients; nothing reads the environment at request time.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LensError, LensResult};
use crate::proxy::ProxyConfig;

/// Environment variable holding the service base URL
pub const API_URL_ENV: &str = "LEGAL_LENS_API_URL";

/// Environment variable holding an optional proxy spec
pub const PROXY_ENV: &str = "LEGAL_LENS_PROXY";

/// Local development address used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Path of the analysis endpoint
pub const QUERY_PATH: &str = "/api/query";

/// Path of the contact endpoint
pub const CONTACT_PATH: &str = "/api/contact";

/// Base address of the analysis service plus transport options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

impl EndpointConfig {
    /// Create a config for the given base URL.
    ///
    /// The URL must be absolute http(s); one trailing slash is dropped so that
    /// endpoint paths join cleanly.
    pub fn new(base_url: impl AsRef<str>) -> LensResult<Self> {
        let raw = base_url.as_ref().trim();
        let parsed = Url::parse(raw)
            .map_err(|e| LensError::config(format!("invalid base URL '{}': {}", raw, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LensError::config(format!(
                "base URL '{}' must use http or https",
                raw
            )));
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
            proxy: None,
        })
    }

    /// Attach a proxy
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> LensResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> LensResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = present(API_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url)?;

        if let Some(spec) = present(PROXY_ENV) {
            config = config.with_proxy(ProxyConfig::parse(&spec)?);
        }

        tracing::debug!(base_url = %config.base_url, proxy = config.proxy.is_some(), "endpoint configured");
        Ok(config)
    }

    /// The configured base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the analysis endpoint
    pub fn query_url(&self) -> String {
        format!("{}{}", self.base_url, QUERY_PATH)
    }

    /// Full URL of the contact endpoint
    pub fn contact_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_PATH)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
        }
    }
}
