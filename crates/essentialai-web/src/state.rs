//! Shared application state for the web server.

use std::sync::Arc;
use essentialai_config::Config;
use essentialai_predict::{build_predictor, PredictError, Predictor, RemotePredictor};

use crate::session::SessionStore;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    /// Backs the slider form and the JSON API.
    pub predictor: Arc<dyn Predictor>,
    /// The classic page always talks to the hosted model directly.
    pub remote: Arc<RemotePredictor>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, PredictError> {
        let predictor = build_predictor(&config.predictor)?;
        Self::with_predictor(config, predictor)
    }

    /// State with an explicit predictor for the slider form.
    pub fn with_predictor(config: Config, predictor: Arc<dyn Predictor>) -> Result<Self, PredictError> {
        let remote = Arc::new(RemotePredictor::from_config(&config.predictor)?);
        let sessions = SessionStore::new(config.session.ttl());
        Ok(Self { config, predictor, remote, sessions })
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.session.cookie_name
    }
}

pub type SharedState = Arc<AppState>;
