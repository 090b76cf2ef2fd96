//! Result Normalization
//!
//! Maps the service's untyped JSON payload onto [`AnalysisResult`]. The
//! mapping is total: members of an unexpected type are dropped rather than
//! failing the whole response.

use serde_json::Value;

use crate::types::{AnalysisResult, Citation, LegalEntity, LlmAnswer};

/// Shape `payload` for display.
///
/// `query` is always `original_query`; whatever the service echoes is ignored.
pub fn normalize(payload: &Value, original_query: &str) -> AnalysisResult {
    if !payload.is_object() {
        tracing::debug!(kind = value_kind(payload), "payload is not an object");
    }

    AnalysisResult {
        query: original_query.to_string(),
        legal_entities: sequence(payload.get("legal_entities"))
            .into_iter()
            .map(LegalEntity::from)
            .collect(),
        context: payload
            .get("context")
            .and_then(Value::as_str)
            .map(str::to_string),
        llm_answer: payload.get("llm_answer").and_then(answer),
        citations: sequence(payload.get("citations"))
            .into_iter()
            .map(Citation::from)
            .collect(),
    }
}

/// Arrays pass through; a lone string counts as a one-element sequence.
fn sequence(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        Some(s @ Value::String(_)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn answer(value: &Value) -> Option<LlmAnswer> {
    match value {
        Value::Object(map) => {
            let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
            Some(LlmAnswer {
                summary: text("summary"),
                explanation: text("explanation"),
            })
        }
        // Bare answers are wrapped as a summary, as the service itself does.
        Value::String(s) => Some(LlmAnswer {
            summary: Some(s.clone()),
            explanation: None,
        }),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
