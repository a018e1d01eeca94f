use std::fmt;

use drill_core::model::QuizStats;

use crate::vm::time_fmt::format_secs;

const BAR_WIDTH: usize = 30;

/// Final report for a finished quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_str: String,
    pub wrong: u32,
    pub total_str: String,
    pub average_str: String,
    pub fastest_str: String,
    pub slowest_str: String,
    pub timing_bars: Vec<String>,
}

impl From<&QuizStats> for ResultsVm {
    fn from(stats: &QuizStats) -> Self {
        Self {
            score_str: format!("{} / {}", stats.correct_count(), stats.question_count()),
            wrong: stats.wrong_count(),
            total_str: format_secs(stats.total_secs()),
            average_str: format_secs(stats.average_secs()),
            fastest_str: format_secs(stats.fastest_secs()),
            slowest_str: format_secs(stats.slowest_secs()),
            timing_bars: timing_bars(stats.per_question_secs(), BAR_WIDTH),
        }
    }
}

impl fmt::Display for ResultsVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Results")?;
        writeln!(f, "  Correct:          {}", self.score_str)?;
        writeln!(f, "  Wrong:            {}", self.wrong)?;
        writeln!(f, "  Total time:       {}", self.total_str)?;
        writeln!(f, "  Average/problem:  {}", self.average_str)?;
        writeln!(f, "  Fastest problem:  {}", self.fastest_str)?;
        writeln!(f, "  Slowest problem:  {}", self.slowest_str)?;
        if !self.timing_bars.is_empty() {
            writeln!(f)?;
            writeln!(f, "Time per problem")?;
            for line in &self.timing_bars {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

/// One text bar per problem, scaled so the slowest fills `width`.
#[must_use]
pub fn timing_bars(per_question_secs: &[f64], width: usize) -> Vec<String> {
    let slowest = per_question_secs.iter().copied().fold(0.0_f64, f64::max);
    per_question_secs
        .iter()
        .enumerate()
        .map(|(i, secs)| {
            let len = if slowest > 0.0 {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let len = ((secs / slowest) * width as f64).round() as usize;
                len.clamp(1, width)
            } else {
                1
            };
            format!("Q{:<2} {:<width$} {}", i + 1, "█".repeat(len), format_secs(*secs))
        })
        .collect()
}
