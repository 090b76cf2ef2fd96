//! HTTP Client Factory
//!
//! Builds the reqwest client shared by the analysis and contact clients.

use legal_lens_core::{LensError, LensResult, ProxyConfig};

/// Build a `reqwest::Client` with the resolved proxy configuration.
///
/// - `Some(proxy)` -> configure proxy on the client
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
///
/// No timeout is set; requests are bounded only by reqwest's defaults.
pub fn build_http_client(proxy: Option<&ProxyConfig>) -> LensResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    match proxy {
        Some(cfg) => {
            let mut p = reqwest::Proxy::all(cfg.url())
                .map_err(|e| LensError::config(format!("invalid proxy: {}", e)))?;
            if let (Some(u), Some(pw)) = (&cfg.username, &cfg.password) {
                p = p.basic_auth(u, pw);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    builder
        .build()
        .map_err(|e| LensError::config(format!("failed to build HTTP client: {}", e)))
}
