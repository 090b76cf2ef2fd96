//! HTTP Session Integration Tests
//!
//! Full submissions through `AppState` and the HTTP client against a local
//! mock analysis service.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use legal_lens::commands;
use legal_lens::{AppState, SessionPhase};
use legal_lens_core::fallback::{FALLBACK_CITATION, FALLBACK_SUMMARY};
use legal_lens_core::{synthesize, EndpointConfig, InputMode};

async fn spawn_service(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

fn app_state(addr: SocketAddr) -> AppState {
    let config = EndpointConfig::new(format!("http://{}/", addr)).unwrap();
    AppState::from_config(config).unwrap()
}

/// Mirrors the real service: echoes the query and detects one entity
async fn analyse(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let Some(query) = body.get("query").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing 'query' field"})),
        );
    };
    (
        StatusCode::OK,
        Json(json!({
            "query": query,
            "legal_entities": [{"text": "Clause 5", "type": "clause"}],
            "context": "Contract termination",
            "llm_answer": {"summary": format!("Analysis of: {}", query)},
            "citations": ["Restatement (Second) of Contracts"]
        })),
    )
}

#[tokio::test]
async fn test_round_trip_through_service() {
    let addr = spawn_service(Router::new().route("/api/query", post(analyse))).await;
    let state = app_state(addr);

    let view = commands::submit_query(&state, " Explain clause 5 ".to_string())
        .await
        .data
        .unwrap();

    assert_eq!(view.phase, SessionPhase::Succeeded);
    assert!(view.error_banner.is_none());
    assert!(view.completion_banner);

    let result = view.result.unwrap();
    assert_eq!(result.query, "Explain clause 5");
    assert_eq!(result.entities, Some(vec!["Clause 5".to_string()]));
    assert_eq!(
        result.answer.unwrap().summary.as_deref(),
        Some("Analysis of: Explain clause 5")
    );
    assert_eq!(
        result.citations,
        Some(vec!["Restatement (Second) of Contracts".to_string()])
    );
}

#[tokio::test]
async fn test_server_error_falls_back() {
    async fn crash() -> (StatusCode, Json<Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "model unavailable"})),
        )
    }
    let addr = spawn_service(Router::new().route("/api/query", post(crash))).await;
    let state = app_state(addr);

    let view = commands::submit_query(&state, "Is this lease valid?".to_string())
        .await
        .data
        .unwrap();

    // Both the banner and the placeholder result are shown
    assert_eq!(view.phase, SessionPhase::Failed);
    assert_eq!(view.error_banner.as_deref(), Some("API Error: 500"));
    let result = view.result.unwrap();
    assert_eq!(result.query, "Is this lease valid?");
    assert_eq!(result.answer.unwrap().summary.as_deref(), Some(FALLBACK_SUMMARY));
    assert_eq!(result.citations, Some(vec![FALLBACK_CITATION.to_string()]));

    let session = state.session().snapshot().await;
    assert_eq!(session.result, Some(synthesize("Is this lease valid?")));
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    async fn garbage() -> &'static str {
        "{\"query\": "
    }
    let addr = spawn_service(Router::new().route("/api/query", post(garbage))).await;
    let state = app_state(addr);

    commands::set_input_mode(&state, InputMode::PastedDocument).await;
    commands::set_input_value(
        &state,
        InputMode::PastedDocument,
        "The tenant shall pay rent monthly.".to_string(),
    )
    .await;
    let view = commands::submit_analysis(&state).await.data.unwrap();

    assert_eq!(view.phase, SessionPhase::Failed);
    assert!(view
        .error_banner
        .unwrap()
        .starts_with("Failed to parse response"));
    assert_eq!(
        view.result.unwrap().query,
        "The tenant shall pay rent monthly."
    );
}

#[tokio::test]
async fn test_service_down_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let state = app_state(addr);

    let view = commands::submit_query(&state, "q".to_string())
        .await
        .data
        .unwrap();

    assert_eq!(view.phase, SessionPhase::Failed);
    assert!(view.error_banner.is_some());
    assert!(view.result.is_some());
}
