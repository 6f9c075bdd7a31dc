use thiserror::Error;

/// Errors raised at the engine's boundaries (configuration, I/O, storage).
///
/// The analyzers themselves never fail: degenerate input maps to floor
/// results instead.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
