//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::model::{DigitConfigError, QuizStatsError};

use crate::quiz::{QuizAction, QuizStatus};

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    InvalidConfig(#[from] DigitConfigError),
    #[error("cannot {action} while the quiz is {status}")]
    InvalidTransition {
        action: QuizAction,
        status: QuizStatus,
    },
    #[error(transparent)]
    Stats(#[from] QuizStatsError),
}
