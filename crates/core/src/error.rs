//! Core Error Types
//!
//! Defines the error type shared across the Legal Lens workspace.
//! Only `EmptyInput` and `RequestFailed` ever reach the session controller;
//! the remaining variants cover configuration and the contact boundary.

use thiserror::Error;

/// Message shown inline when the active input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a query or upload a document.";

/// Message shown when the contact form could not be delivered.
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Error type for the Legal Lens workspace.
#[derive(Error, Debug)]
pub enum LensError {
    /// Active input was empty or whitespace-only
    #[error("Please enter a query or upload a document.")]
    EmptyInput,

    /// Any network failure, non-success status, or undecodable body.
    ///
    /// The reason is displayed verbatim, e.g. `API Error: 500`.
    #[error("{0}")]
    RequestFailed(String),

    /// Contact form is missing a required field
    #[error("Please fill in all required fields.")]
    IncompleteForm,

    /// Contact form submission failed
    #[error("Failed to submit form. Please try again.")]
    ContactFailed,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Legal Lens errors
pub type LensResult<T> = Result<T, LensError>;

impl LensError {
    /// Create a request failure
    pub fn request_failed(reason: impl Into<String>) -> Self {
        Self::RequestFailed(reason.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Convert LensError to a string suitable for a presentation boundary
impl From<LensError> for String {
    fn from(err: LensError) -> String {
        err.to_string()
    }
}
