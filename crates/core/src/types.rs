//! Analysis Types
//!
//! Request and result shapes exchanged with the analysis service, plus the
//! tagged unions used for its loosely typed fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which input channel supplies the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Free-form question typed by the user
    #[default]
    Text,
    /// Document text pasted into the editor
    PastedDocument,
    /// Address of a document to analyze
    Url,
}

impl InputMode {
    /// All modes in tab order
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::PastedDocument, InputMode::Url];

    /// Placeholder shown in the input for this mode
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputMode::Text => "Ask a legal question...",
            InputMode::PastedDocument => "Paste your legal text here for analysis...",
            InputMode::Url => "Enter document URL...",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Text => write!(f, "text"),
            InputMode::PastedDocument => write!(f, "pasted_document"),
            InputMode::Url => write!(f, "url"),
        }
    }
}

impl std::str::FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(InputMode::Text),
            "pasted_document" | "pasted" | "document" => Ok(InputMode::PastedDocument),
            "url" => Ok(InputMode::Url),
            other => Err(format!("Unknown input mode: {}", other)),
        }
    }
}

/// Value of the active input channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    pub mode: InputMode,
    pub value: String,
}

/// Body of a single analysis call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    query: String,
}

impl AnalysisRequest {
    /// Wrap an already validated, trimmed query
    pub(crate) fn new(query: String) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Reads a display string out of a JSON member.
///
/// Strings are used as-is, other scalars by their JSON text; null, empty
/// strings and containers yield nothing.
fn member_label(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// An entity detected in the query: a bare string or a structured record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegalEntity {
    Plain(String),
    Structured(Value),
}

impl LegalEntity {
    /// Display label: `reference`, then `text`, then the raw string.
    ///
    /// Records carrying neither field fall back to their compact JSON.
    pub fn label(&self) -> String {
        match self {
            LegalEntity::Plain(s) => s.clone(),
            LegalEntity::Structured(value) => member_label(value, "reference")
                .or_else(|| member_label(value, "text"))
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

impl From<&str> for LegalEntity {
    fn from(s: &str) -> Self {
        LegalEntity::Plain(s.to_string())
    }
}

impl From<Value> for LegalEntity {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => LegalEntity::Plain(s),
            other => LegalEntity::Structured(other),
        }
    }
}

/// A supporting citation: a bare string or an arbitrary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Citation {
    Plain(String),
    Structured(Value),
}

impl Citation {
    /// Display label; records are shown as compact JSON
    pub fn label(&self) -> String {
        match self {
            Citation::Plain(s) => s.clone(),
            Citation::Structured(value) => value.to_string(),
        }
    }
}

impl From<&str> for Citation {
    fn from(s: &str) -> Self {
        Citation::Plain(s.to_string())
    }
}

impl From<Value> for Citation {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Citation::Plain(s),
            other => Citation::Structured(other),
        }
    }
}

/// Generated answer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LlmAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Renderable analysis outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Always the query the user submitted
    pub query: String,
    #[serde(default)]
    pub legal_entities: Vec<LegalEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_answer: Option<LlmAnswer>,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl AnalysisResult {
    /// A result carrying only the query
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            legal_entities: Vec::new(),
            context: None,
            llm_answer: None,
            citations: Vec::new(),
        }
    }

    /// Display labels of all entities, in order
    pub fn entity_labels(&self) -> Vec<String> {
        self.legal_entities.iter().map(LegalEntity::label).collect()
    }

    /// Display labels of all citations, in order
    pub fn citation_labels(&self) -> Vec<String> {
        self.citations.iter().map(Citation::label).collect()
    }
}
