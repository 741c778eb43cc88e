//! Client for the hosted Gradio prediction app.
//!
//! Request:  POST <endpoint>  { "data": [ [f1, ..., f10] ] }
//! Response: { "data": [ <prediction>, ... ] }, only data[0] is used.

use async_trait::async_trait;
use essentialai_common::{FeatureVector, PredictionResult, PredictorKind, KNOWN_ACTIVITIES};
use essentialai_config::PredictorConfig;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::predictor::{PredictError, Predictor};

pub struct RemotePredictor {
    pub endpoint: String,
    client: reqwest::Client,
}

impl RemotePredictor {
    /// Client with no request timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::Client::new() }
    }

    pub fn from_config(config: &PredictorConfig) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self { endpoint: config.endpoint.clone(), client: builder.build()? })
    }

    /// POST the features and return `data[0]` untouched.
    #[instrument(skip(self, features), fields(endpoint = %self.endpoint))]
    pub async fn invoke_raw(&self, features: &FeatureVector) -> Result<Value, PredictError> {
        let resp = self.client
            .post(&self.endpoint)
            .json(&request_body(features))
            .send()
            .await?;
        let json = check_response_status(resp).await?;
        let first = first_output(json)?;
        debug!("Remote prediction received");
        Ok(first)
    }
}

#[async_trait]
impl Predictor for RemotePredictor {
    async fn predict(&self, features: &FeatureVector) -> Result<Vec<PredictionResult>, PredictError> {
        let output = self.invoke_raw(features).await?;
        parse_output(&output)
    }

    fn kind(&self) -> PredictorKind {
        PredictorKind::Remote
    }
}

// ── Wire helpers ─────────────────────────────────────────────────────────────

/// The feature vector wrapped in an outer array under `data`.
pub fn request_body(features: &FeatureVector) -> Value {
    serde_json::json!({ "data": [features.values()] })
}

async fn check_response_status(resp: reqwest::Response) -> Result<Value, PredictError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    if status >= 400 {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body["error"].as_str().map(String::from))
            .unwrap_or(text);
        return Err(PredictError::ApiError { status, message });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Take `data[0]` out of a response body.
pub fn first_output(mut body: Value) -> Result<Value, PredictError> {
    let data = body
        .get_mut("data")
        .and_then(Value::as_array_mut)
        .ok_or(PredictError::MissingField("data"))?;
    if data.is_empty() {
        return Err(PredictError::MissingField("data[0]"));
    }
    Ok(data.swap_remove(0))
}

/// Turn a raw `data[0]` into scored results.
///
/// Accepted shapes:
///   Gradio label  `{ "label": .., "confidences": [{ "label", "confidence" }] }`, probabilities
///   list          `[{ "label", "confidence" }]`, percentages
///   map           `{ "<label>": <probability> }`
///   string        a single label, reported at 100%
pub fn parse_output(output: &Value) -> Result<Vec<PredictionResult>, PredictError> {
    match output {
        Value::Object(obj) if obj.contains_key("confidences") => {
            let items = obj["confidences"]
                .as_array()
                .ok_or_else(|| PredictError::UnexpectedShape("confidences is not an array".to_string()))?;
            items.iter().map(|item| scored_item(item, 100.0)).collect()
        }
        Value::Array(items) => items.iter().map(|item| scored_item(item, 1.0)).collect(),
        Value::Object(obj) => obj
            .iter()
            .map(|(label, p)| -> Result<PredictionResult, PredictError> {
                let p = p.as_f64().ok_or_else(|| {
                    PredictError::UnexpectedShape(format!("probability for '{}' is not a number", label))
                })?;
                Ok(PredictionResult::new(label.clone(), clamp_percent(label, p * 100.0)))
            })
            .collect(),
        Value::String(label) => Ok(vec![PredictionResult::new(label.clone(), 100.0)]),
        other => Err(PredictError::UnexpectedShape(format!("unsupported value {}", other))),
    }
}

fn scored_item(item: &Value, scale: f64) -> Result<PredictionResult, PredictError> {
    let label = item["label"]
        .as_str()
        .ok_or_else(|| PredictError::UnexpectedShape(format!("missing label in {}", item)))?;
    let confidence = item["confidence"]
        .as_f64()
        .ok_or_else(|| PredictError::UnexpectedShape(format!("missing confidence for '{}'", label)))?;
    Ok(PredictionResult::new(label, clamp_percent(label, confidence * scale)))
}

fn clamp_percent(label: &str, value: f64) -> f64 {
    if !KNOWN_ACTIVITIES.contains(&label) {
        debug!(label, "Remote model returned an unfamiliar activity label");
    }
    if !(0.0..=100.0).contains(&value) {
        warn!(label, value, "Confidence outside [0, 100], clamping");
    }
    value.clamp(0.0, 100.0)
}

/// Text shown for a raw `data[0]`: strings verbatim, anything else as compact JSON.
pub fn display_text(output: &Value) -> String {
    match output {
        Value::String(s) => s.clone(),
        Value::Object(obj) if obj.get("label").and_then(Value::as_str).is_some() => {
            obj["label"].as_str().unwrap_or_default().to_string()
        }
        other => other.to_string(),
    }
}
