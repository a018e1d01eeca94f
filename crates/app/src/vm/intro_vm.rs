use std::fmt;

use drill_core::model::{DigitConfig, operand_range};
use services::QUESTION_COUNT;

/// Welcome text shown once before the first quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub question_count: usize,
    pub config: DigitConfig,
}

impl IntroVm {
    #[must_use]
    pub fn new(config: DigitConfig) -> Self {
        Self {
            question_count: QUESTION_COUNT,
            config,
        }
    }
}

impl fmt::Display for IntroVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = operand_range(self.config.first_digits());
        let second = operand_range(self.config.second_digits());
        writeln!(f, "Multiplication drill")?;
        writeln!(f, "Solve {} multiplication problems as fast as you can.", self.question_count)?;
        writeln!(
            f,
            "Settings: {} (first operand {}..={}, second operand {}..={})",
            self.config,
            first.start(),
            first.end(),
            second.start(),
            second.end()
        )?;
        writeln!(f, "Type each answer and press Enter. Results appear after the last problem.")
    }
}
