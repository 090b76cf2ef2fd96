//! Legal Lens - Analysis Workflow Library
//!
//! Client-side workflow for submitting a legal query or document to the
//! analysis service and presenting the result. It includes:
//! - Command handlers for a presentation host
//! - The analysis session state machine and result rendering
//! - Shared application state

pub mod commands;
pub mod models;
pub mod services;
pub mod state;

pub use commands::{
    // Analysis commands
    get_analysis_view, reset_analysis, set_input_mode, set_input_value, submit_analysis,
    submit_query,
    // Contact commands
    submit_contact,
    // Line parsing
    HostCommand, HostParseError,
};
pub use models::response::*;
pub use services::{render, AnalysisSessionController, SessionPhase, SessionState, SessionView, SubmitOutcome};
pub use state::AppState;
