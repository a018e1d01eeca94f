mod feedback;
mod progress;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use feedback::Feedback;
pub use progress::QuizProgress;
pub use session::{AnswerOutcome, QUESTION_COUNT, QuizAction, QuizSession, QuizStatus};
