//! Session Integration Tests
//!
//! Drives `AnalysisSessionController` through full submissions against
//! scripted backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use legal_lens::{AnalysisSessionController, SessionPhase, SubmitOutcome};
use legal_lens_client::AnalysisBackend;
use legal_lens_core::{
    synthesize, AnalysisRequest, InputMode, LensError, LensResult, EMPTY_INPUT_MESSAGE,
};

// ============================================================================
// Test Backends
// ============================================================================

/// Answers every request with the same response
struct ScriptedBackend {
    calls: AtomicUsize,
    queries: std::sync::Mutex<Vec<String>>,
    response: LensResult<Value>,
}

impl ScriptedBackend {
    fn ok(payload: Value) -> Arc<Self> {
        Self::with(Ok(payload))
    }

    fn failing(message: &str) -> Arc<Self> {
        Self::with(Err(LensError::request_failed(message)))
    }

    fn with(response: LensResult<Value>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            queries: std::sync::Mutex::new(Vec::new()),
            response,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn submit(&self, request: &AnalysisRequest) -> LensResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(request.query().to_string());
        match &self.response {
            Ok(payload) => Ok(payload.clone()),
            Err(e) => Err(LensError::request_failed(e.to_string())),
        }
    }
}

/// Holds every request until released
struct GatedBackend {
    calls: AtomicUsize,
    release: Notify,
}

impl GatedBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl AnalysisBackend for GatedBackend {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn submit(&self, _request: &AnalysisRequest) -> LensResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(json!({"context": "released"}))
    }
}

/// Never answers
struct SilentBackend {
    calls: AtomicUsize,
}

#[async_trait]
impl AnalysisBackend for SilentBackend {
    fn name(&self) -> &'static str {
        "silent"
    }

    async fn submit(&self, _request: &AnalysisRequest) -> LensResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

async fn wait_for_phase(controller: &AnalysisSessionController, phase: SessionPhase) {
    controller
        .subscribe()
        .wait_for(|state| state.phase == phase)
        .await
        .unwrap();
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_blank_inputs_never_reach_the_network() {
    let backend = ScriptedBackend::ok(json!({}));
    let controller = AnalysisSessionController::new(backend.clone());

    for blank in ["", " ", "\t", "\n\n", "  \r\n  "] {
        for mode in InputMode::ALL {
            controller.set_mode(mode).await;
            controller.set_value(mode, blank).await;

            let outcome = controller.submit().await;

            assert_eq!(outcome, SubmitOutcome::Rejected(EMPTY_INPUT_MESSAGE.to_string()));
            let state = controller.snapshot().await;
            assert_eq!(state.phase, SessionPhase::Idle);
            assert_eq!(state.error_message.as_deref(), Some(EMPTY_INPUT_MESSAGE));
        }
    }

    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_rejection_keeps_previous_result() {
    let backend = ScriptedBackend::ok(json!({"context": "first"}));
    let controller = AnalysisSessionController::new(backend.clone());

    controller.submit_query("first question").await;
    let before = controller.snapshot().await.result;
    assert!(before.is_some());

    let outcome = controller.submit_query("   ").await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    let state = controller.snapshot().await;
    assert_eq!(state.result, before);
    assert_eq!(state.error_message.as_deref(), Some(EMPTY_INPUT_MESSAGE));
    assert_eq!(backend.calls(), 1);
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_success_preserves_optional_fields() {
    let backend = ScriptedBackend::ok(json!({
        "query": "echoed by the service",
        "legal_entities": [{"reference": "Sec. 5", "type": "section"}, "Plain"],
        "context": "Employment contract",
        "llm_answer": {"summary": "Short.", "explanation": "Longer."},
        "citations": ["Case A v. B", {"source": "Statute 12"}]
    }));
    let controller = AnalysisSessionController::new(backend.clone());

    let outcome = controller.submit_query("  What does section 5 mean?  ").await;

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    let state = controller.snapshot().await;
    assert_eq!(state.phase, SessionPhase::Succeeded);
    assert!(state.error_message.is_none());
    assert!(state.completed_at.is_some());

    let result = state.result.unwrap();
    assert_eq!(result.query, "What does section 5 mean?");
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "query": "What does section 5 mean?",
            "legal_entities": [{"reference": "Sec. 5", "type": "section"}, "Plain"],
            "context": "Employment contract",
            "llm_answer": {"summary": "Short.", "explanation": "Longer."},
            "citations": ["Case A v. B", {"source": "Statute 12"}]
        })
    );

    // The trimmed query is what goes over the wire
    assert_eq!(
        *backend.queries.lock().unwrap(),
        vec!["What does section 5 mean?".to_string()]
    );
}

#[tokio::test]
async fn test_each_mode_submits_its_own_buffer() {
    let backend = ScriptedBackend::ok(json!({}));
    let controller = AnalysisSessionController::new(backend.clone());

    controller.set_value(InputMode::Text, "a question").await;
    controller.set_value(InputMode::Url, "https://example.com/lease.pdf").await;

    controller.set_mode(InputMode::Url).await;
    controller.submit().await;
    controller.reset().await;

    controller.set_mode(InputMode::Text).await;
    controller.submit().await;

    assert_eq!(
        *backend.queries.lock().unwrap(),
        vec![
            "https://example.com/lease.pdf".to_string(),
            "a question".to_string()
        ]
    );
}

// ============================================================================
// Failure
// ============================================================================

#[tokio::test]
async fn test_failure_shows_placeholder_and_error() {
    for message in ["API Error: 500", "error sending request", "Failed to parse response: EOF"] {
        let controller = AnalysisSessionController::new(ScriptedBackend::failing(message));

        let outcome = controller.submit_query("Is this NDA enforceable?").await;

        assert_eq!(outcome, SubmitOutcome::FellBack(message.to_string()));
        let state = controller.snapshot().await;
        assert_eq!(state.phase, SessionPhase::Failed);
        assert_eq!(state.result, Some(synthesize("Is this NDA enforceable?")));
        assert_eq!(state.error_message.as_deref(), Some(message));
    }
}

// ============================================================================
// Reset
// ============================================================================

#[tokio::test]
async fn test_reset_is_idempotent_from_terminal_phases() {
    let succeeded = AnalysisSessionController::new(ScriptedBackend::ok(json!({})));
    succeeded.submit_query("q").await;
    let failed = AnalysisSessionController::new(ScriptedBackend::failing("down"));
    failed.submit_query("q").await;

    for (controller, phase) in [(&succeeded, SessionPhase::Succeeded), (&failed, SessionPhase::Failed)] {
        assert_eq!(controller.snapshot().await.phase, phase);

        for _ in 0..3 {
            assert!(controller.reset().await);
            let state = controller.snapshot().await;
            assert_eq!(state.phase, SessionPhase::Idle);
            assert!(state.result.is_none());
            assert!(state.error_message.is_none());
            assert_eq!(state.input.active_value(), "");
        }
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_second_submit_while_submitting_is_ignored() {
    let backend = GatedBackend::new();
    let controller = AnalysisSessionController::new(backend.clone());
    controller.set_value(InputMode::Text, "first").await;

    let in_flight = controller.spawn_submit();
    wait_for_phase(&controller, SessionPhase::Submitting).await;

    assert_eq!(controller.submit().await, SubmitOutcome::Busy);
    assert_eq!(controller.submit_query("second").await, SubmitOutcome::Busy);
    assert!(!controller.reset().await);

    let state = controller.snapshot().await;
    assert_eq!(state.phase, SessionPhase::Submitting);
    assert_eq!(state.input.active_value(), "first");

    backend.release.notify_one();
    assert_eq!(in_flight.await.unwrap(), SubmitOutcome::Succeeded);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Succeeded);
}

#[tokio::test]
async fn test_dropped_submit_leaves_session_usable() {
    let backend = Arc::new(SilentBackend {
        calls: AtomicUsize::new(0),
    });
    let controller = AnalysisSessionController::new(backend.clone());

    let timed_out = tokio::time::timeout(Duration::from_millis(50), controller.submit_query("q"))
        .await
        .is_err();
    assert!(timed_out);

    let state = controller.snapshot().await;
    assert_eq!(state.phase, SessionPhase::Idle);
    assert_eq!(state.input.active_value(), "q");

    // A new attempt starts a second request instead of reporting Busy
    let retry = tokio::time::timeout(Duration::from_millis(50), controller.submit()).await;
    assert!(retry.is_err());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);

    assert!(controller.reset().await);
    assert_eq!(controller.snapshot().await.phase, SessionPhase::Idle);
}

#[tokio::test]
async fn test_response_after_drop_is_discarded() {
    let backend = GatedBackend::new();
    let controller = AnalysisSessionController::new(backend.clone());
    controller.set_value(InputMode::Text, "q").await;
    let mut updates = controller.subscribe();

    let in_flight = controller.spawn_submit();
    updates
        .wait_for(|state| state.phase == SessionPhase::Submitting)
        .await
        .unwrap();

    drop(controller);
    backend.release.notify_one();

    assert_eq!(in_flight.await.unwrap(), SubmitOutcome::Discarded);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert_eq!(updates.borrow().phase, SessionPhase::Submitting);
}

#[tokio::test]
async fn test_subscriber_sees_every_phase() {
    let backend = GatedBackend::new();
    let controller = AnalysisSessionController::new(backend.clone());
    controller.set_value(InputMode::Text, "q").await;
    let mut updates = controller.subscribe();

    let in_flight = controller.spawn_submit();
    updates
        .wait_for(|state| state.phase == SessionPhase::Submitting)
        .await
        .unwrap();
    backend.release.notify_one();
    updates
        .wait_for(|state| state.phase == SessionPhase::Succeeded)
        .await
        .unwrap();

    assert_eq!(in_flight.await.unwrap(), SubmitOutcome::Succeeded);
    assert_eq!(
        updates.borrow().result.as_ref().and_then(|r| r.context.clone()),
        Some("released".to_string())
    );
}
