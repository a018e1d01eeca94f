use serde::Serialize;
use thiserror::Error;

use crate::model::AttemptRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizStatsError {
    #[error("cannot summarize a quiz with no attempts")]
    NoAttempts,

    #[error("total elapsed time must be a non-negative number of seconds")]
    InvalidTotalElapsed,

    #[error("too many attempts for a single quiz: {len}")]
    TooManyAttempts { len: usize },
}

/// Accuracy and timing summary for a finished quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizStats {
    question_count: u32,
    correct_count: u32,
    wrong_count: u32,
    total_secs: f64,
    average_secs: f64,
    fastest_secs: f64,
    slowest_secs: f64,
    per_question_secs: Vec<f64>,
}

impl QuizStats {
    /// Build a summary from the attempts of a finished quiz.
    ///
    /// `total_secs` is the wall time from quiz start to the last answer; the
    /// average is that total divided by the number of questions, so time spent
    /// between questions is included.
    ///
    /// # Errors
    ///
    /// Returns `QuizStatsError::NoAttempts` for an empty slice,
    /// `QuizStatsError::InvalidTotalElapsed` for a negative or non-finite total, and
    /// `QuizStatsError::TooManyAttempts` if the count cannot fit in `u32`.
    pub fn from_attempts(
        attempts: &[AttemptRecord],
        total_secs: f64,
    ) -> Result<Self, QuizStatsError> {
        if attempts.is_empty() {
            return Err(QuizStatsError::NoAttempts);
        }
        if !total_secs.is_finite() || total_secs < 0.0 {
            return Err(QuizStatsError::InvalidTotalElapsed);
        }
        let question_count = u32::try_from(attempts.len())
            .map_err(|_| QuizStatsError::TooManyAttempts { len: attempts.len() })?;

        let mut correct_count = 0_u32;
        let mut fastest_secs = f64::INFINITY;
        let mut slowest_secs = 0.0_f64;
        for attempt in attempts {
            if attempt.correct {
                correct_count = correct_count.saturating_add(1);
            }
            fastest_secs = fastest_secs.min(attempt.elapsed_secs);
            slowest_secs = slowest_secs.max(attempt.elapsed_secs);
        }

        Ok(Self {
            question_count,
            correct_count,
            wrong_count: question_count - correct_count,
            total_secs,
            average_secs: total_secs / f64::from(question_count),
            fastest_secs,
            slowest_secs,
            per_question_secs: attempts.iter().map(|a| a.elapsed_secs).collect(),
        })
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    #[must_use]
    pub fn average_secs(&self) -> f64 {
        self.average_secs
    }

    #[must_use]
    pub fn fastest_secs(&self) -> f64 {
        self.fastest_secs
    }

    #[must_use]
    pub fn slowest_secs(&self) -> f64 {
        self.slowest_secs
    }

    /// Solving time of each question, in answer order.
    #[must_use]
    pub fn per_question_secs(&self) -> &[f64] {
        &self.per_question_secs
    }

    /// Fraction of questions answered correctly, in `0.0..=1.0`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        f64::from(self.correct_count) / f64::from(self.question_count)
    }
}
