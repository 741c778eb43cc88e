//! Predictor trait, error type and backend selection.

use async_trait::async_trait;
use essentialai_common::{FeatureVector, PredictionResult, PredictorKind, ResultsBundle};
use essentialai_config::{PredictorConfig, PredictorMode};
use std::sync::Arc;
use thiserror::Error;

use crate::fixed::StaticPredictor;
use crate::remote::RemotePredictor;

/// The only message users see when a prediction cannot be produced.
pub const PREDICTION_FAILED: &str = "Prediction failed.";

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
    #[error("Response is missing {0}")]
    MissingField(&'static str),
    #[error("Unexpected prediction shape: {0}")]
    UnexpectedShape(String),
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<Vec<PredictionResult>, PredictError>;
    fn kind(&self) -> PredictorKind;

    /// Predict and wrap the outcome with its inputs.
    async fn predict_bundle(&self, features: &FeatureVector) -> Result<ResultsBundle, PredictError> {
        let predictions = self.predict(features).await?;
        Ok(ResultsBundle::new(predictions, *features, self.kind()))
    }
}

/// Build the predictor selected by `config.mode`.
pub fn build_predictor(config: &PredictorConfig) -> Result<Arc<dyn Predictor>, PredictError> {
    match config.mode {
        PredictorMode::Static => Ok(Arc::new(StaticPredictor::new())),
        PredictorMode::Remote => Ok(Arc::new(RemotePredictor::from_config(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_static_by_default() {
        let p = build_predictor(&PredictorConfig::default()).unwrap();
        assert_eq!(p.kind(), PredictorKind::Static);
    }

    #[test]
    fn test_build_remote() {
        let config = PredictorConfig {
            mode: PredictorMode::Remote,
            endpoint: "http://127.0.0.1:7860/".to_string(),
            timeout_secs: Some(5),
        };
        let p = build_predictor(&config).unwrap();
        assert_eq!(p.kind(), PredictorKind::Remote);
    }

    #[tokio::test]
    async fn test_bundle_carries_inputs_and_source() {
        let features = FeatureVector::new(vec![1.0; 10]).unwrap();
        let bundle = StaticPredictor::new().predict_bundle(&features).await.unwrap();
        assert_eq!(bundle.input_data, features);
        assert_eq!(bundle.source, PredictorKind::Static);
        assert_eq!(bundle.predictions.len(), 5);
    }
}
