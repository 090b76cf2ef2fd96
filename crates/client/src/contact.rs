//! Contact Form Client
//!
//! One-shot POST of the contact form to `{base_url}/api/contact`. Any
//! failure is reported as a single generic error.

use serde::{Deserialize, Serialize};

use legal_lens_core::{EndpointConfig, LensError, LensResult};

use crate::http_client::build_http_client;

/// Topic selected in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    General,
    Support,
    Enterprise,
    Partnership,
    Feedback,
    Other,
}

impl InquiryType {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Support => "Technical Support",
            InquiryType::Enterprise => "Enterprise Solutions",
            InquiryType::Partnership => "Partnership",
            InquiryType::Feedback => "Feedback",
            InquiryType::Other => "Other",
        }
    }
}

impl std::str::FromStr for InquiryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(InquiryType::General),
            "support" => Ok(InquiryType::Support),
            "enterprise" => Ok(InquiryType::Enterprise),
            "partnership" => Ok(InquiryType::Partnership),
            "feedback" => Ok(InquiryType::Feedback),
            "other" => Ok(InquiryType::Other),
            other => Err(format!("Unknown inquiry type: {}", other)),
        }
    }
}

/// Contact form fields, serialized with the service's camelCase keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub inquiry_type: Option<InquiryType>,
    pub message: String,
}

impl ContactSubmission {
    /// Name, email, message and inquiry type are required; company is not.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
            && self.inquiry_type.is_some()
    }
}

/// Client for the contact endpoint
pub struct ContactClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ContactClient {
    pub fn new(config: &EndpointConfig) -> LensResult<Self> {
        Ok(Self {
            endpoint: config.contact_url(),
            client: build_http_client(config.proxy.as_ref())?,
        })
    }

    /// Send the form once.
    pub async fn submit(&self, form: &ContactSubmission) -> LensResult<()> {
        if !form.is_complete() {
            return Err(LensError::IncompleteForm);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "contact submission failed");
                LensError::ContactFailed
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "contact submission rejected");
            return Err(LensError::ContactFailed);
        }

        tracing::info!("contact form submitted");
        Ok(())
    }
}
