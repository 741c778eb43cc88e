//! Placeholder predictor returning a fixed result set.

use async_trait::async_trait;
use essentialai_common::{FeatureVector, PredictionResult, PredictorKind};

use crate::predictor::{PredictError, Predictor};

const FIXED_RESULTS: [(&str, f64); 5] = [
    ("antimicrobial", 85.6),
    ("antioxidant", 72.3),
    ("anti-inflammatory", 68.9),
    ("antifungal", 45.2),
    ("analgesic", 32.1),
];

/// Ignores its input and always returns the same five activities.
#[derive(Debug, Clone, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn results() -> Vec<PredictionResult> {
        FIXED_RESULTS
            .iter()
            .map(|(label, confidence)| PredictionResult::new(*label, *confidence))
            .collect()
    }
}

#[async_trait]
impl Predictor for StaticPredictor {
    async fn predict(&self, _features: &FeatureVector) -> Result<Vec<PredictionResult>, PredictError> {
        tracing::debug!("Serving fixed prediction set");
        Ok(Self::results())
    }

    fn kind(&self) -> PredictorKind {
        PredictorKind::Static
    }
}
