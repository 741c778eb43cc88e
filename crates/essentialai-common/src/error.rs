use thiserror::Error;

#[derive(Debug, Error)]
pub enum EssentialError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Expected {expected} features, got {actual}")]
    FeatureArity { expected: usize, actual: usize },

    #[error("Feature {index} is not a finite number")]
    NonFiniteFeature { index: usize },
}

pub type Result<T> = std::result::Result<T, EssentialError>;
