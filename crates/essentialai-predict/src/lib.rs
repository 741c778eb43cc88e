//! essentialai-predict — Prediction backends behind a single `Predictor` trait.
//!
//! Backends:
//!   RemotePredictor — hosted Gradio app, one JSON POST per prediction
//!   StaticPredictor — fixed placeholder result set, ignores its input

pub mod predictor;
pub mod remote;
pub mod fixed;

pub use fixed::StaticPredictor;
pub use predictor::{build_predictor, PredictError, Predictor, PREDICTION_FAILED};
pub use remote::RemotePredictor;
