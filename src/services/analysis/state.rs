//! Analysis Session State
//!
//! The state owned by one analysis session and the pure transitions between
//! phases. The controller wraps these with locking and I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use legal_lens_core::{AnalysisRequest, AnalysisResult, InputMode, InputModeSelector, LensError};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Checking the active input (never observable for long)
    Validating,
    /// A request is in flight
    Submitting,
    /// The service answered
    Succeeded,
    /// The service could not be used; a placeholder result is shown
    Failed,
}

impl SessionPhase {
    /// Check if this phase ends a submission attempt
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Succeeded | SessionPhase::Failed)
    }

    /// Check if a submission is being processed
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionPhase::Validating | SessionPhase::Submitting)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "idle"),
            SessionPhase::Validating => write!(f, "validating"),
            SessionPhase::Submitting => write!(f, "submitting"),
            SessionPhase::Succeeded => write!(f, "succeeded"),
            SessionPhase::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for SessionPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(SessionPhase::Idle),
            "validating" => Ok(SessionPhase::Validating),
            "submitting" => Ok(SessionPhase::Submitting),
            "succeeded" => Ok(SessionPhase::Succeeded),
            "failed" => Ok(SessionPhase::Failed),
            _ => Err(format!("Unknown session phase: {}", s)),
        }
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefusal {
    /// Another request is already in flight
    Busy,
    /// The active input failed validation
    Invalid(String),
}

/// State of one analysis session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Correlates log lines of the same session
    pub session_id: String,
    pub phase: SessionPhase,
    pub input: InputModeSelector,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
    /// When the last request settled
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Create a new idle session
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            phase: SessionPhase::Idle,
            input: InputModeSelector::new(),
            result: None,
            error_message: None,
            completed_at: None,
        }
    }

    /// Switch the active input mode
    pub fn set_mode(&mut self, mode: InputMode) {
        self.input.set_mode(mode);
    }

    /// Replace one input buffer
    pub fn set_value(&mut self, mode: InputMode, value: impl Into<String>) {
        self.input.set_value(mode, value);
    }

    /// Enter `Validating`.
    ///
    /// Refused while a request is in flight.
    pub fn begin_validation(&mut self) -> Result<(), SubmitRefusal> {
        if self.phase.is_busy() {
            return Err(SubmitRefusal::Busy);
        }
        self.phase = SessionPhase::Validating;
        Ok(())
    }

    /// Leave `Validating`: either back to `Idle` with the validation message,
    /// or on to `Submitting` with the request to send.
    ///
    /// A rejected input leaves `result` untouched.
    pub fn finish_validation(&mut self) -> Result<AnalysisRequest, SubmitRefusal> {
        debug_assert_eq!(self.phase, SessionPhase::Validating);

        match AnalysisRequest::try_new(self.input.active_value()) {
            Ok(request) => {
                self.phase = SessionPhase::Submitting;
                self.error_message = None;
                Ok(request)
            }
            Err(err) => {
                let message = err.to_string();
                self.phase = SessionPhase::Idle;
                self.error_message = Some(message.clone());
                Err(SubmitRefusal::Invalid(message))
            }
        }
    }

    /// Apply a genuine service response
    pub fn succeed(&mut self, result: AnalysisResult) {
        self.phase = SessionPhase::Succeeded;
        self.result = Some(result);
        self.error_message = None;
        self.completed_at = Some(Utc::now());
    }

    /// Apply a request failure together with its placeholder result.
    ///
    /// The error message is kept alongside the placeholder.
    pub fn fail(&mut self, error: &LensError, fallback: AnalysisResult) {
        self.phase = SessionPhase::Failed;
        self.result = Some(fallback);
        self.error_message = Some(error.to_string());
        self.completed_at = Some(Utc::now());
    }

    /// Leave `Submitting` without a response; the input is kept for a retry.
    ///
    /// Returns whether the session was submitting.
    pub fn abandon(&mut self) -> bool {
        if self.phase != SessionPhase::Submitting {
            return false;
        }
        self.phase = SessionPhase::Idle;
        true
    }

    /// Return to `Idle`, dropping the result, the error and the active input.
    ///
    /// Ignored while a request is in flight; returns whether it applied.
    pub fn reset(&mut self) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.phase = SessionPhase::Idle;
        self.result = None;
        self.error_message = None;
        self.completed_at = None;
        self.input.clear_active();
        true
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
