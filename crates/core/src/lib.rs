//! Legal Lens Core
//!
//! Domain types and pure logic of the query analysis workflow. This crate
//! performs no I/O; the HTTP side lives in `legal-lens-client` and the
//! session state machine in the root crate.
//!
//! ## Module Organization
//!
//! - `error` - Workspace error type (`LensError`, `LensResult`)
//! - `types` - Request/result shapes and the entity/citation unions
//! - `input` - Per-mode input buffers (`InputModeSelector`)
//! - `validation` - Submission gate
//! - `normalize` - Untyped payload → `AnalysisResult`
//! - `fallback` - Placeholder result for unreachable services
//! - `config` - Endpoint configuration
//! - `proxy` - Proxy configuration data types

pub mod config;
pub mod error;
pub mod fallback;
pub mod input;
pub mod normalize;
pub mod proxy;
pub mod types;
pub mod validation;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{LensError, LensResult, CONTACT_FAILED_MESSAGE, EMPTY_INPUT_MESSAGE};

// ── Analysis Types ─────────────────────────────────────────────────────
pub use types::{
    AnalysisRequest, AnalysisResult, Citation, InputMode, LegalEntity, LlmAnswer, QueryInput,
};

// ── Workflow Steps ─────────────────────────────────────────────────────
pub use fallback::synthesize;
pub use input::InputModeSelector;
pub use normalize::normalize;
pub use validation::validate;

// ── Configuration ──────────────────────────────────────────────────────
pub use config::EndpointConfig;
pub use proxy::{ProxyConfig, ProxyProtocol};
