//! Application State
//!
//! Holds the services a presentation host talks to: one analysis session
//! and the contact client, both built from the same endpoint configuration.

use std::sync::Arc;

use legal_lens_client::{AnalysisBackend, ContactClient, HttpAnalysisClient};
use legal_lens_core::{EndpointConfig, LensResult};

use crate::services::analysis::AnalysisSessionController;

/// Application state shared by command handlers
pub struct AppState {
    config: EndpointConfig,
    session: AnalysisSessionController,
    contact: ContactClient,
}

impl AppState {
    /// Build state from the process environment
    pub fn from_env() -> LensResult<Self> {
        Self::from_config(EndpointConfig::from_env()?)
    }

    /// Build state talking HTTP to `config`
    pub fn from_config(config: EndpointConfig) -> LensResult<Self> {
        let backend: Arc<dyn AnalysisBackend> = Arc::new(HttpAnalysisClient::new(&config)?);
        Self::with_backend(config, backend)
    }

    /// Build state with a custom analysis backend
    pub fn with_backend(config: EndpointConfig, backend: Arc<dyn AnalysisBackend>) -> LensResult<Self> {
        let contact = ContactClient::new(&config)?;
        Ok(Self {
            config,
            session: AnalysisSessionController::new(backend),
            contact,
        })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// The analysis session
    pub fn session(&self) -> &AnalysisSessionController {
        &self.session
    }

    /// The contact client
    pub fn contact(&self) -> &ContactClient {
        &self.contact
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_url", &self.config.base_url())
            .field("session", &self.session)
            .finish()
    }
}
