//! JSON API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use essentialai_common::{FeatureVector, Interpretation, ResultsBundle};
use essentialai_predict::PREDICTION_FAILED;
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub bundle: ResultsBundle,
    pub interpretation: Interpretation,
}

/// POST /api/predict — 422 on bad input, 502 when the predictor fails
pub async fn api_predict(
    State(state): State<SharedState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let features = match payload {
        Ok(Json(req)) => match FeatureVector::new(req.features) {
            Ok(f) => f,
            Err(e) => return invalid_input(e.to_string()),
        },
        Err(rejection) => return invalid_input(rejection.body_text()),
    };

    match state.predictor.predict_bundle(&features).await {
        Ok(bundle) => {
            let interpretation = bundle.interpretation();
            Json(PredictResponse { bundle, interpretation }).into_response()
        }
        Err(e) => {
            tracing::warn!("API prediction failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": PREDICTION_FAILED })),
            )
                .into_response()
        }
    }
}

fn invalid_input(message: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "predictor": state.predictor.kind(),
        "sessions": state.sessions.len().await,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
