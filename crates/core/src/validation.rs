//! Query Validation
//!
//! Minimal submission gate: the trimmed active value must not be empty.
//! There is no length ceiling and no content check.

use crate::error::{LensError, LensResult};
use crate::types::AnalysisRequest;

/// Trim `active_value` and reject it when nothing is left.
pub fn validate(active_value: &str) -> LensResult<String> {
    let trimmed = active_value.trim();
    if trimmed.is_empty() {
        return Err(LensError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

impl AnalysisRequest {
    /// Build a request from raw input, applying [`validate`].
    pub fn try_new(raw: &str) -> LensResult<Self> {
        validate(raw).map(AnalysisRequest::new)
    }
}
