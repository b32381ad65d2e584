use thiserror::Error;

/// Errors that can occur during engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("step {step} is out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("invalid history: {0}")]
    InvalidHistory(String),

    #[error("transcript error: {0}")]
    Transcript(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Transcript(e.to_string())
    }
}
