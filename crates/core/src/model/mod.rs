mod attempt;
mod problem;
mod stats;

pub use attempt::AttemptRecord;
pub use problem::{
    DigitConfig, DigitConfigError, MAX_DIGITS, MIN_DIGITS, Problem, digits_in_range,
    operand_range,
};
pub use stats::{QuizStats, QuizStatsError};
