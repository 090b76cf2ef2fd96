//! View Model Types
//!
//! Presentation-neutral description of what the analysis panel shows.
//! Every optional section is `None` when it should not be drawn.

use chrono::{DateTime, Utc};
use legal_lens_core::QueryInput;
use serde::{Deserialize, Serialize};

use crate::services::analysis::SessionPhase;

pub const SUBMIT_LABEL: &str = "Start Legal Analysis";
pub const SUBMITTING_LABEL: &str = "Analyzing with AI...";
pub const RESET_LABEL: &str = "Analyze Another Document";
pub const COMPLETE_BANNER: &str = "Analysis Complete!";

/// Generated answer group; present only if one of its parts is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerView {
    pub summary: Option<String>,
    pub explanation: Option<String>,
}

/// Rendered analysis result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub query: String,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub entities: Option<Vec<String>>,
    pub answer: Option<AnswerView>,
    pub context: Option<String>,
    pub citations: Option<Vec<String>>,
}

/// Everything the analysis panel needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: SessionPhase,
    /// Active tab and its text
    pub input: QueryInput,
    pub error_banner: Option<String>,
    pub completion_banner: bool,
    pub show_submit: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub show_reset: bool,
    pub result: Option<ResultView>,
}

impl std::fmt::Display for ResultView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Legal Analysis Results:")?;
        if let Some(at) = self.analyzed_at {
            writeln!(f, "Analyzed on {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        writeln!(f, "Query: {}", self.query)?;

        if let Some(entities) = &self.entities {
            writeln!(f, "Detected Legal Entities: {}", entities.join(", "))?;
        }

        if let Some(answer) = &self.answer {
            writeln!(f, "AI Analysis:")?;
            if let Some(summary) = &answer.summary {
                writeln!(f, "  Summary: {}", summary)?;
            }
            if let Some(explanation) = &answer.explanation {
                writeln!(f, "  Explanation: {}", explanation)?;
            }
        }

        if let Some(context) = &self.context {
            writeln!(f, "Context: {}", context)?;
        }

        if let Some(citations) = &self.citations {
            writeln!(f, "Citations:")?;
            for citation in citations {
                writeln!(f, "  • {}", citation)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for SessionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error_banner {
            writeln!(f, "[!] {}", error)?;
        }
        if self.completion_banner {
            writeln!(f, "[✓] {}", COMPLETE_BANNER)?;
        }
        if let Some(result) = &self.result {
            write!(f, "{}", result)?;
        }
        if self.show_submit {
            let state = if self.submit_enabled { "" } else { " (disabled)" };
            writeln!(f, "[ {} ]{}", self.submit_label, state)?;
        }
        if self.show_reset {
            writeln!(f, "[ {} ]", RESET_LABEL)?;
        }
        Ok(())
    }
}
