/// Core value types passed between the input form, the predictors and the results view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::confidence::{interpret, ConfidenceBand, Interpretation};
use crate::error::{EssentialError, Result};

/// Number of chemical-property inputs the model expects.
pub const FEATURE_COUNT: usize = 10;

/// Slider bounds used by the predict form.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10.0;
pub const SLIDER_STEP: f64 = 0.1;

/// Display name of the feature at `index` (0-based).
pub fn feature_label(index: usize) -> String {
    format!("Chemical Property {}", index + 1)
}

// ---------------------------------------------------------------------------
// Feature vector
// ---------------------------------------------------------------------------

/// Fixed-arity, ordered chemical-property inputs.
///
/// Serialized as a plain JSON array of `FEATURE_COUNT` numbers. Deserializing
/// an array of the wrong length or containing a non-finite value fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() != FEATURE_COUNT {
            return Err(EssentialError::FeatureArity {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EssentialError::NonFiniteFeature { index });
        }
        let mut out = [0.0; FEATURE_COUNT];
        out.copy_from_slice(&values);
        Ok(Self(out))
    }

    pub fn zeros() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Clamp every value into the slider range.
    pub fn clamped_to_slider(mut self) -> Self {
        for v in self.0.iter_mut() {
            *v = v.clamp(SLIDER_MIN, SLIDER_MAX);
        }
        self
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = EssentialError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(v: FeatureVector) -> Self {
        v.0.to_vec()
    }
}

// ---------------------------------------------------------------------------
// Prediction result
// ---------------------------------------------------------------------------

/// Biological activities the hosted model was trained on.
pub const KNOWN_ACTIVITIES: &[&str] = &[
    "antimicrobial",
    "antioxidant",
    "anti-inflammatory",
    "antifungal",
    "analgesic",
];

/// One biological-activity label with its confidence percentage in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self { label: label.into(), confidence }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

// ---------------------------------------------------------------------------
// Results bundle
// ---------------------------------------------------------------------------

/// Which predictor produced a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorKind {
    Static,
    Remote,
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorKind::Static => f.write_str("static"),
            PredictorKind::Remote => f.write_str("remote"),
        }
    }
}

/// Predictions together with the inputs that produced them.
///
/// This is what gets parked in a session slot between the predict form and
/// the results page, and what the download link returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsBundle {
    pub predictions: Vec<PredictionResult>,
    pub input_data: FeatureVector,
    pub source: PredictorKind,
    pub generated_at: DateTime<Utc>,
}

impl ResultsBundle {
    pub fn new(predictions: Vec<PredictionResult>, input_data: FeatureVector, source: PredictorKind) -> Self {
        Self { predictions, input_data, source, generated_at: Utc::now() }
    }

    pub fn interpretation(&self) -> Interpretation {
        interpret(&self.predictions)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
