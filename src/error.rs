//! Error handling for the resume classifier application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeClassifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Document too large: {size} bytes (maximum {max})")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Could not find known skills in the document")]
    NoSkillsFound,

    #[error("Training corpus error: {0}")]
    CorpusLoad(String),

    #[error("Training did not converge: {0}")]
    TrainingDivergence(String),

    #[error("Model not available: {0}")]
    ModelUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ResumeClassifierError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeClassifierError {
    fn from(err: anyhow::Error) -> Self {
        ResumeClassifierError::InvalidInput(err.to_string())
    }
}
