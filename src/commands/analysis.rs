//! Analysis Commands
//!
//! Mutation points of the analysis panel. Each returns the freshly rendered
//! view so the host can redraw.

use legal_lens_core::InputMode;

use crate::models::response::CommandResponse;
use crate::services::render::{render, SessionView};
use crate::state::AppState;

async fn current_view(state: &AppState) -> SessionView {
    render(&state.session().snapshot().await)
}

/// Render the panel without changing anything
pub async fn get_analysis_view(state: &AppState) -> CommandResponse<SessionView> {
    CommandResponse::ok(current_view(state).await)
}

/// Switch the active input tab
pub async fn set_input_mode(state: &AppState, mode: InputMode) -> CommandResponse<SessionView> {
    state.session().set_mode(mode).await;
    CommandResponse::ok(current_view(state).await)
}

/// Replace the text of one input tab
pub async fn set_input_value(
    state: &AppState,
    mode: InputMode,
    value: String,
) -> CommandResponse<SessionView> {
    state.session().set_value(mode, value).await;
    CommandResponse::ok(current_view(state).await)
}

/// Submit the active input and wait for it to settle.
///
/// Failures are already folded into the view (error banner plus placeholder
/// result), so this always succeeds at the envelope level.
pub async fn submit_analysis(state: &AppState) -> CommandResponse<SessionView> {
    let outcome = state.session().submit().await;
    tracing::debug!(?outcome, "submit_analysis settled");
    CommandResponse::ok(current_view(state).await)
}

/// Fill the active tab with `query` and submit it
pub async fn submit_query(state: &AppState, query: String) -> CommandResponse<SessionView> {
    let outcome = state.session().submit_query(query).await;
    tracing::debug!(?outcome, "submit_query settled");
    CommandResponse::ok(current_view(state).await)
}

/// Clear the result and start over
pub async fn reset_analysis(state: &AppState) -> CommandResponse<SessionView> {
    if !state.session().reset().await {
        return CommandResponse::err("An analysis is still running");
    }
    CommandResponse::ok(current_view(state).await)
}
