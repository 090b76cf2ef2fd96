//! Analysis Session Controller
//!
//! Owns one [`SessionState`] and drives it through
//! Idle → Validating → Submitting → Succeeded/Failed → Idle.
//! At most one request is in flight per session. The state lock is never
//! held across the network call.

use std::sync::{Arc, Weak};

use serde_json::Value;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use legal_lens_client::AnalysisBackend;
use legal_lens_core::{normalize, synthesize, AnalysisRequest, InputMode, LensResult};

use super::state::{SessionState, SubmitRefusal};

/// How a call to `submit` ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was sent
    Rejected(String),
    /// A request was already in flight; nothing changed
    Busy,
    /// The service answered and its result is shown
    Succeeded,
    /// The request failed; the placeholder result and the error are shown
    FellBack(String),
    /// The session was dropped before the response arrived
    Discarded,
}

struct SessionInner {
    state: Mutex<SessionState>,
    backend: Arc<dyn AnalysisBackend>,
    updates: watch::Sender<SessionState>,
}

impl SessionInner {
    fn publish(&self, state: &SessionState) {
        self.updates.send_replace(state.clone());
    }

    /// Validate the active input and move to `Submitting`.
    async fn begin(&self) -> Result<AnalysisRequest, SubmitOutcome> {
        let mut state = self.state.lock().await;

        if let Err(SubmitRefusal::Busy) = state.begin_validation() {
            debug!(session_id = %state.session_id, "submit ignored, request already in flight");
            return Err(SubmitOutcome::Busy);
        }
        self.publish(&state);

        let result = state.finish_validation();
        self.publish(&state);

        match result {
            Ok(request) => {
                debug!(session_id = %state.session_id, mode = %state.input.mode(), "analysis submitted");
                Ok(request)
            }
            Err(SubmitRefusal::Invalid(message)) => {
                debug!(session_id = %state.session_id, "submission rejected by validation");
                Err(SubmitOutcome::Rejected(message))
            }
            Err(SubmitRefusal::Busy) => Err(SubmitOutcome::Busy),
        }
    }

    /// Apply the settled request to the state.
    async fn finish(&self, request: &AnalysisRequest, response: LensResult<Value>) -> SubmitOutcome {
        let mut state = self.state.lock().await;

        let outcome = match response {
            Ok(payload) => {
                state.succeed(normalize(&payload, request.query()));
                info!(session_id = %state.session_id, "analysis succeeded");
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                warn!(session_id = %state.session_id, error = %err, "analysis failed, showing placeholder result");
                state.fail(&err, synthesize(request.query()));
                SubmitOutcome::FellBack(err.to_string())
            }
        };

        self.publish(&state);
        outcome
    }

    /// Return an abandoned `Submitting` session to `Idle`.
    fn abandon(&self, state: &mut SessionState) {
        if state.abandon() {
            warn!(session_id = %state.session_id, "submission abandoned before the response arrived");
            self.publish(state);
        }
    }
}

/// Armed while a caller-driven submission awaits its response.
///
/// Dropping the `submit` future before it settles would otherwise leave the
/// session in `Submitting` with nobody left to finish it.
struct InFlight {
    inner: Arc<SessionInner>,
    armed: bool,
}

impl InFlight {
    fn new(inner: &Arc<SessionInner>) -> Self {
        Self {
            inner: inner.clone(),
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match self.inner.state.try_lock() {
            Ok(mut state) => self.inner.abandon(&mut state),
            Err(_) => {
                // Lock is busy; settle once it frees up. No new submission can
                // start meanwhile because the phase is still `Submitting`.
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let inner = self.inner.clone();
                    handle.spawn(async move {
                        let mut state = inner.state.lock().await;
                        inner.abandon(&mut state);
                    });
                }
            }
        }
    }
}

/// Orchestrates one analysis session for a presentation layer.
///
/// The session lives as long as the controller; dropping it while a
/// [`spawn_submit`](Self::spawn_submit) request is in flight discards the
/// late response without cancelling the transport call.
pub struct AnalysisSessionController {
    inner: Arc<SessionInner>,
}

impl AnalysisSessionController {
    /// Create an idle session backed by `backend`
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        let state = SessionState::new();
        let (updates, _) = watch::channel(state.clone());
        debug!(session_id = %state.session_id, backend = backend.name(), "analysis session created");

        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(state),
                backend,
                updates,
            }),
        }
    }

    /// Current state
    pub async fn snapshot(&self) -> SessionState {
        self.inner.state.lock().await.clone()
    }

    /// Receive every published state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.updates.subscribe()
    }

    /// Switch the active input mode
    pub async fn set_mode(&self, mode: InputMode) {
        let mut state = self.inner.state.lock().await;
        state.set_mode(mode);
        self.inner.publish(&state);
    }

    /// Replace the buffer of `mode`
    pub async fn set_value(&self, mode: InputMode, value: impl Into<String>) {
        let mut state = self.inner.state.lock().await;
        state.set_value(mode, value);
        self.inner.publish(&state);
    }

    /// Submit the active input and wait for the request to settle.
    ///
    /// If this future is dropped before the response arrives, the request is
    /// abandoned and the session returns to `Idle`.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = match self.inner.begin().await {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let in_flight = InFlight::new(&self.inner);
        let response = self.inner.backend.submit(&request).await;
        let outcome = self.inner.finish(&request, response).await;
        in_flight.disarm();
        outcome
    }

    /// Put `query` into the active buffer, then [`submit`](Self::submit).
    ///
    /// The buffer is left untouched if a request is already in flight.
    pub async fn submit_query(&self, query: impl Into<String>) -> SubmitOutcome {
        {
            let mut state = self.inner.state.lock().await;
            if state.phase.is_busy() {
                return SubmitOutcome::Busy;
            }
            let mode = state.input.mode();
            state.set_value(mode, query);
            self.inner.publish(&state);
        }
        self.submit().await
    }

    /// Submit on the runtime without tying the request to this handle.
    ///
    /// Only a weak reference is held while the request is in flight.
    pub fn spawn_submit(&self) -> JoinHandle<SubmitOutcome> {
        let weak: Weak<SessionInner> = Arc::downgrade(&self.inner);

        tokio::spawn(async move {
            let (request, backend) = {
                let Some(inner) = weak.upgrade() else {
                    return SubmitOutcome::Discarded;
                };
                match inner.begin().await {
                    Ok(request) => (request, inner.backend.clone()),
                    Err(outcome) => return outcome,
                }
            };

            let response = backend.submit(&request).await;

            match weak.upgrade() {
                Some(inner) => inner.finish(&request, response).await,
                None => {
                    debug!("session dropped before response arrived, discarding");
                    SubmitOutcome::Discarded
                }
            }
        })
    }

    /// Return to `Idle`, clearing result, error and the active input.
    ///
    /// Has no effect while a request is in flight; returns whether it applied.
    pub async fn reset(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        let applied = state.reset();
        if applied {
            debug!(session_id = %state.session_id, "session reset");
            self.inner.publish(&state);
        }
        applied
    }
}

impl std::fmt::Debug for AnalysisSessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisSessionController")
            .field("backend", &self.inner.backend.name())
            .finish()
    }
}
