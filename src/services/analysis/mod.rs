//! Analysis Session Service
//!
//! The submit/result/reset cycle of the query analysis workflow.

mod controller;
mod state;

pub use controller::{AnalysisSessionController, SubmitOutcome};
pub use state::{SessionPhase, SessionState, SubmitRefusal};
