//! Proxy Configuration Types
//!
//! Data types for routing the outbound analysis and contact calls through a
//! proxy. The actual HTTP client factory is in the `legal-lens-client` crate.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LensError, LensResult};

/// Proxy protocol type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    Http,
    Https,
    Socks5,
}

impl ProxyProtocol {
    /// Return the URL scheme string for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        }
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(ProxyProtocol::Http),
            "https" => Some(ProxyProtocol::Https),
            "socks5" => Some(ProxyProtocol::Socks5),
            _ => None,
        }
    }
}

/// Proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    pub protocol: ProxyProtocol,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Only held in memory; never serialized.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Parse a `scheme://[user[:pass]@]host:port` proxy spec.
    pub fn parse(spec: &str) -> LensResult<Self> {
        let url = Url::parse(spec.trim())
            .map_err(|e| LensError::config(format!("invalid proxy '{}': {}", spec, e)))?;

        let protocol = ProxyProtocol::from_scheme(url.scheme()).ok_or_else(|| {
            LensError::config(format!("unsupported proxy scheme '{}'", url.scheme()))
        })?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| LensError::config(format!("proxy '{}' has no host", spec)))?
            .to_string();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| LensError::config(format!("proxy '{}' has no port", spec)))?;

        let username = match url.username() {
            "" => None,
            u => Some(u.to_string()),
        };

        Ok(Self {
            protocol,
            host,
            port,
            username,
            password: url.password().map(str::to_string),
        })
    }

    /// Build the proxy URL string (without auth).
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port)
    }
}
