#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use drill_core::Clock;

pub use error::QuizError;
pub use quiz::{
    AnswerOutcome, Feedback, QUESTION_COUNT, QuizAction, QuizProgress, QuizSession, QuizStatus,
};
