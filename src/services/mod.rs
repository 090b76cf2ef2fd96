//! Services
//!
//! Workflow logic called by the commands layer.

pub mod analysis;
pub mod render;

pub use analysis::{AnalysisSessionController, SessionPhase, SessionState, SubmitOutcome};
pub use render::{render, SessionView};
