//! essentialai-common — Shared types, errors, and interpretation rules used across all EssentialAI crates.

pub mod error;
pub mod entities;
pub mod confidence;

// Re-export commonly used types
pub use confidence::{interpret, ConfidenceBand, Interpretation};
pub use entities::{
    feature_label, FeatureVector, PredictionResult, PredictorKind, ResultsBundle,
    FEATURE_COUNT, KNOWN_ACTIVITIES, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP,
};
pub use error::{EssentialError, Result};
