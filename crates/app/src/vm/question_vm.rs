use std::fmt;

use services::{QuizProgress, QuizSession};

use crate::vm::time_fmt::format_secs;

const PROGRESS_WIDTH: usize = 20;

/// Everything the terminal prints while a problem is on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub progress_bar: String,
    pub elapsed_str: String,
    pub feedback: Option<String>,
    pub prompt: String,
}

impl QuestionVm {
    /// `None` unless the session has a problem waiting for an answer.
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let problem = session.current_problem()?;
        let progress = session.progress();
        Some(Self {
            number: session.current_index() + 1,
            total: progress.total,
            progress_bar: progress_bar(&progress, PROGRESS_WIDTH),
            elapsed_str: format_secs(session.elapsed_secs()),
            feedback: session.feedback().map(ToString::to_string),
            prompt: problem.prompt(),
        })
    }
}

impl fmt::Display for QuestionVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if let Some(feedback) = &self.feedback {
            writeln!(f, "{feedback}")?;
        }
        writeln!(
            f,
            "Problem {} / {}  {}  elapsed {}",
            self.number, self.total, self.progress_bar, self.elapsed_str
        )?;
        write!(f, "{} ", self.prompt)
    }
}

#[must_use]
pub fn progress_bar(progress: &QuizProgress, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((progress.fraction() * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
