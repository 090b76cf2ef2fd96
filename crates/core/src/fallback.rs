//! Placeholder Results
//!
//! Fixed demo content shown when the analysis service cannot be reached, so
//! the result panel is never blank after a submission attempt.

use crate::types::{AnalysisResult, Citation, LegalEntity, LlmAnswer};

pub const FALLBACK_ENTITY: &str = "Sample Entity";
pub const FALLBACK_CONTEXT: &str = "Mock context for demo";
pub const FALLBACK_SUMMARY: &str =
    "This is a demo response. Please ensure your backend is running on port 5000.";
pub const FALLBACK_EXPLANATION: &str =
    "The backend server needs to be started to get real analysis results.";
pub const FALLBACK_CITATION: &str = "Demo Citation";

/// Build the placeholder result for `original_query`.
pub fn synthesize(original_query: &str) -> AnalysisResult {
    AnalysisResult {
        query: original_query.to_string(),
        legal_entities: vec![LegalEntity::from(FALLBACK_ENTITY)],
        context: Some(FALLBACK_CONTEXT.to_string()),
        llm_answer: Some(LlmAnswer {
            summary: Some(FALLBACK_SUMMARY.to_string()),
            explanation: Some(FALLBACK_EXPLANATION.to_string()),
        }),
        citations: vec![Citation::from(FALLBACK_CITATION)],
    }
}
