//! Result Rendering
//!
//! Turns a [`SessionState`] into a [`SessionView`]. Empty strings and empty
//! sequences count as absent, so their sections are omitted rather than
//! drawn blank.

mod view;

pub use view::{
    AnswerView, ResultView, SessionView, COMPLETE_BANNER, RESET_LABEL, SUBMITTING_LABEL,
    SUBMIT_LABEL,
};

use chrono::{DateTime, Utc};
use legal_lens_core::AnalysisResult;

use crate::services::analysis::{SessionPhase, SessionState};

/// Build the view for `state`.
///
/// After a failed request both the error banner and the placeholder result
/// are shown.
pub fn render(state: &SessionState) -> SessionView {
    let submitting = state.phase == SessionPhase::Submitting;
    let result = state
        .result
        .as_ref()
        .map(|r| render_result(r, state.completed_at));
    let has_result = result.is_some();

    SessionView {
        phase: state.phase,
        input: state.input.current(),
        error_banner: state.error_message.clone(),
        completion_banner: has_result && state.phase.is_terminal(),
        show_submit: !has_result,
        submit_enabled: !state.phase.is_busy(),
        submit_label: (if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }).to_string(),
        show_reset: has_result,
        result,
    }
}

/// Build the result panel for one analysis result.
pub fn render_result(result: &AnalysisResult, analyzed_at: Option<DateTime<Utc>>) -> ResultView {
    let answer = result.llm_answer.as_ref().and_then(|answer| {
        let summary = non_empty(answer.summary.as_deref());
        let explanation = non_empty(answer.explanation.as_deref());
        if summary.is_none() && explanation.is_none() {
            None
        } else {
            Some(AnswerView {
                summary,
                explanation,
            })
        }
    });

    ResultView {
        query: result.query.clone(),
        analyzed_at,
        entities: non_empty_list(result.entity_labels()),
        answer,
        context: non_empty(result.context.as_deref()),
        citations: non_empty_list(result.citation_labels()),
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_string)
}

fn non_empty_list(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
