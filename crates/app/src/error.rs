use thiserror::Error;

use services::QuizError;

/// Errors that end the program with a non-zero exit code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] drill_core::Error),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode statistics: {0}")]
    Json(#[from] serde_json::Error),
}
