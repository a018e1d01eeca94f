use clap::Parser;

use drill_core::ProblemGenerator;
use drill_core::model::DigitConfig;

use crate::terminal::RunOptions;

/// Command-line and environment configuration for the drill.
#[derive(Debug, Parser)]
#[command(name = "drill", version, about = "Timed multiplication drill, ten problems per round")]
pub struct Cli {
    /// Digits in the first operand (1-6)
    #[arg(long, env = "DRILL_FIRST_DIGITS", default_value_t = 1)]
    pub first_digits: u8,

    /// Digits in the second operand (1-6)
    #[arg(long, env = "DRILL_SECOND_DIGITS", default_value_t = 1)]
    pub second_digits: u8,

    /// Seed for a reproducible problem sequence
    #[arg(long, env = "DRILL_SEED")]
    pub seed: Option<u64>,

    /// Print the final statistics as JSON and exit after one quiz
    #[arg(long)]
    pub json: bool,

    /// Exit after one quiz instead of offering another round
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// # Errors
    ///
    /// Returns the core config error when a digit count is outside `1..=6`.
    pub fn digit_config(&self) -> Result<DigitConfig, drill_core::Error> {
        Ok(DigitConfig::new(self.first_digits, self.second_digits)?)
    }

    #[must_use]
    pub fn generator(&self) -> ProblemGenerator {
        self.seed
            .map_or_else(ProblemGenerator::from_entropy, ProblemGenerator::seeded)
    }

    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            json: self.json,
            once: self.once,
        }
    }
}
