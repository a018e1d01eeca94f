use chrono::{DateTime, Utc};
use std::fmt;

use drill_core::model::{AttemptRecord, DigitConfig, Problem, QuizStats};
use drill_core::time::elapsed_secs;
use drill_core::{Clock, ProblemGenerator};
use tracing::{debug, info, warn};

use super::feedback::Feedback;
use super::progress::QuizProgress;
use crate::error::QuizError;

/// Number of problems in every quiz.
pub const QUESTION_COUNT: usize = 10;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizStatus {
    Idle,
    InProgress,
    Finished,
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizStatus::Idle => "idle",
            QuizStatus::InProgress => "in progress",
            QuizStatus::Finished => "finished",
        })
    }
}

/// Operations that are only valid in some states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    SubmitAnswer,
    Configure,
    ReadStats,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizAction::SubmitAnswer => "submit an answer",
            QuizAction::Configure => "change digit settings",
            QuizAction::ReadStats => "read statistics",
        })
    }
}

/// Result of answering the current problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerOutcome {
    pub attempt: AttemptRecord,
    pub feedback: Feedback,
    pub status: QuizStatus,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// A multiplication quiz of [`QUESTION_COUNT`] problems.
///
/// Starts `Idle`. [`QuizSession::start`] draws a fresh set of problems and moves
/// to `InProgress`; each [`QuizSession::submit_answer`] grades the current
/// problem and advances. The quiz is `Finished` exactly when every problem has
/// an attempt, and stays there until the next `start`.
pub struct QuizSession {
    clock: Clock,
    generator: ProblemGenerator,
    config: DigitConfig,
    problems: Vec<Problem>,
    current: usize,
    attempts: Vec<AttemptRecord>,
    started_at: Option<DateTime<Utc>>,
    question_started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    feedback: Option<Feedback>,
}

impl QuizSession {
    /// An idle session using the system clock and an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Clock::system(),
            generator: ProblemGenerator::from_entropy(),
            config: DigitConfig::default(),
            problems: Vec::new(),
            current: 0,
            attempts: Vec::new(),
            started_at: None,
            question_started_at: None,
            completed_at: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: ProblemGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Mutable access to the clock, for advancing a fixed clock between answers.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Begin a new quiz with `config`, discarding any previous one.
    ///
    /// Valid from every state. Returns the first problem.
    pub fn start(&mut self, config: DigitConfig) -> &Problem {
        let now = self.clock.now();
        self.config = config;
        self.problems = self.generator.generate_for(config, QUESTION_COUNT);
        self.current = 0;
        self.attempts.clear();
        self.started_at = Some(now);
        self.question_started_at = Some(now);
        self.completed_at = None;
        self.feedback = None;

        debug!(%config, questions = QUESTION_COUNT, "quiz started");
        &self.problems[0]
    }

    /// Validate raw digit counts and start a quiz with them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidConfig` if either count is outside `1..=6`; the
    /// session is left untouched.
    pub fn start_with_digits(
        &mut self,
        first_digits: u8,
        second_digits: u8,
    ) -> Result<&Problem, QuizError> {
        let config = DigitConfig::new(first_digits, second_digits)?;
        Ok(self.start(config))
    }

    /// Start again with the most recently used config.
    pub fn restart(&mut self) -> &Problem {
        self.start(self.config)
    }

    /// Grade `value` against the current problem and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the quiz is in progress. The
    /// session is not modified in that case.
    pub fn submit_answer(&mut self, value: i64) -> Result<AnswerOutcome, QuizError> {
        let status = self.status();
        let (Some(problem), Some(question_started_at)) =
            (self.current_problem().copied(), self.question_started_at)
        else {
            warn!(%status, "answer submitted outside of a running quiz");
            return Err(QuizError::InvalidTransition {
                action: QuizAction::SubmitAnswer,
                status,
            });
        };

        let now = self.clock.now();
        let elapsed = elapsed_secs(question_started_at, now);
        let attempt = AttemptRecord::grade(problem, value, elapsed);
        let feedback = Feedback::from(&attempt);
        self.attempts.push(attempt);
        self.current += 1;
        self.feedback = Some(feedback);

        debug!(
            index = self.current,
            correct = attempt.correct,
            elapsed_secs = attempt.elapsed_secs,
            "answer recorded"
        );

        if self.current == self.problems.len() {
            self.completed_at = Some(now);
            self.question_started_at = None;
            info!(
                correct = self.correct_so_far(),
                total_secs = self.total_elapsed_secs().unwrap_or_default(),
                "quiz finished"
            );
        } else {
            self.question_started_at = Some(now);
        }

        Ok(AnswerOutcome {
            attempt,
            feedback,
            status: self.status(),
        })
    }

    /// Change the digit settings used by [`QuizSession::restart`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` while a quiz is in progress.
    pub fn set_config(&mut self, config: DigitConfig) -> Result<(), QuizError> {
        let status = self.status();
        if status == QuizStatus::InProgress {
            warn!("digit settings changed during a running quiz");
            return Err(QuizError::InvalidTransition {
                action: QuizAction::Configure,
                status,
            });
        }
        self.config = config;
        Ok(())
    }

    //
    // ─── READ ACCESS ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        if self.started_at.is_none() {
            QuizStatus::Idle
        } else if self.current == self.problems.len() {
            QuizStatus::Finished
        } else {
            QuizStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status() == QuizStatus::Finished
    }

    #[must_use]
    pub fn config(&self) -> DigitConfig {
        self.config
    }

    /// Zero-based index of the problem being asked; equals the number of answers.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.problems.len()
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.problems.get(self.current)
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Feedback for the most recent answer, cleared by `start`.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.problems.len(),
            answered: self.attempts.len(),
            remaining: self.problems.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Seconds since the quiz started: running while in progress, frozen once
    /// finished, zero while idle.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => elapsed_secs(start, end),
            (Some(start), None) => elapsed_secs(start, self.clock.now()),
            (None, _) => 0.0,
        }
    }

    /// Wall time from start to the final answer, once finished.
    #[must_use]
    pub fn total_elapsed_secs(&self) -> Option<f64> {
        Some(elapsed_secs(self.started_at?, self.completed_at?))
    }

    /// Accuracy and timing statistics of the finished quiz.
    ///
    /// Computed from the recorded attempts on every call; the session is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the quiz is finished.
    pub fn stats(&self) -> Result<QuizStats, QuizError> {
        let Some(total_secs) = self.total_elapsed_secs() else {
            return Err(QuizError::InvalidTransition {
                action: QuizAction::ReadStats,
                status: self.status(),
            });
        };
        Ok(QuizStats::from_attempts(&self.attempts, total_secs)?)
    }

    fn correct_so_far(&self) -> usize {
        self.attempts.iter().filter(|a| a.correct).count()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("status", &self.status())
            .field("config", &self.config)
            .field("current", &self.current)
            .field("attempts_len", &self.attempts.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
