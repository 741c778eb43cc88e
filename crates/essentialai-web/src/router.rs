//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    home::home,
    predict::{predict_page, predict_submit},
    results::{results_page, results_download},
    classic::{classic_page, classic_submit},
    api::{api_predict, api_health},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                 get(home))
        .route("/predict",          get(predict_page).post(predict_submit))
        .route("/results",          get(results_page))
        .route("/results/download", get(results_download))
        .route("/classic",          get(classic_page).post(classic_submit))

        // API endpoints
        .route("/api/predict", post(api_predict))
        .route("/api/health",  get(api_health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
