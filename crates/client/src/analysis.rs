//! Analysis Request Client
//!
//! One POST per submission to `{base_url}/api/query`. Every failure mode
//! (transport, non-success status, undecodable body) collapses into
//! `LensError::RequestFailed`. There is no retry.

use async_trait::async_trait;
use serde_json::Value;

use legal_lens_core::{AnalysisRequest, EndpointConfig, LensError, LensResult};

use crate::http_client::build_http_client;

/// Anything that can answer an analysis request with a raw payload.
///
/// The payload stays untyped here; shaping happens in normalization.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Perform exactly one request for `request`.
    async fn submit(&self, request: &AnalysisRequest) -> LensResult<Value>;
}

/// HTTP implementation of [`AnalysisBackend`]
pub struct HttpAnalysisClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &EndpointConfig) -> LensResult<Self> {
        Ok(Self {
            endpoint: config.query_url(),
            client: build_http_client(config.proxy.as_ref())?,
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn submit(&self, request: &AnalysisRequest) -> LensResult<Value> {
        tracing::debug!(endpoint = %self.endpoint, query_len = request.query().len(), "submitting analysis request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| LensError::request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "analysis service returned error status");
            return Err(LensError::request_failed(format!(
                "API Error: {}",
                status.as_u16()
            )));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| LensError::request_failed(e.to_string()))?;

        serde_json::from_str(&body_text).map_err(|e| {
            LensError::request_failed(format!("Failed to parse response: {}", e))
        })
    }
}
