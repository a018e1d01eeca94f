//! Line-oriented terminal front end for `QuizSession`.

use std::io::{BufRead, Write};

use drill_core::model::DigitConfig;
use services::QuizSession;
use tracing::debug;

use crate::error::AppError;
use crate::vm::{IntroVm, QuestionVm, ResultsVm};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub json: bool,
    pub once: bool,
}

/// What the user picked after a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextRound {
    Again,
    ChangeDigits,
    Quit,
}

/// How a terminal run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// The user declined another round (or `once`/`json` was set).
    Quit,
    /// Input ran out in the middle of a quiz.
    Abandoned,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    options: RunOptions,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, options: RunOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Play rounds with `config` until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `AppError` on i/o failures or if the session rejects an action.
    pub fn run(
        &mut self,
        session: &mut QuizSession,
        config: DigitConfig,
    ) -> Result<RunEnd, AppError> {
        session.set_config(config)?;
        write!(self.output, "{}", IntroVm::new(config))?;

        loop {
            session.restart();
            if !self.play_round(session)? {
                writeln!(self.output)?;
                writeln!(self.output, "Quiz abandoned.")?;
                return Ok(RunEnd::Abandoned);
            }
            self.report(session)?;

            if self.options.once || self.options.json {
                return Ok(RunEnd::Quit);
            }
            match self.ask_next()? {
                NextRound::Again => {}
                NextRound::ChangeDigits => {
                    let Some(config) = self.ask_digits()? else {
                        return Ok(RunEnd::Quit);
                    };
                    session.set_config(config)?;
                    writeln!(self.output, "Settings: {config}")?;
                }
                NextRound::Quit => return Ok(RunEnd::Quit),
            }
            debug!(config = %session.config(), "starting another round");
        }
    }

    /// Returns `false` if input ended before the last answer.
    fn play_round(&mut self, session: &mut QuizSession) -> Result<bool, AppError> {
        while let Some(question) = QuestionVm::from_session(session) {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let value = loop {
                let Some(line) = self.read_line()? else {
                    return Ok(false);
                };
                match parse_answer(&line) {
                    Some(value) => break value,
                    None => {
                        write!(self.output, "Please enter a whole number: ")?;
                        self.output.flush()?;
                    }
                }
            };
            session.submit_answer(value)?;
        }
        Ok(true)
    }

    fn report(&mut self, session: &QuizSession) -> Result<(), AppError> {
        let stats = session.stats()?;
        writeln!(self.output)?;
        if self.options.json {
            // the JSON block is the last thing on stdout
            writeln!(self.output, "{}", serde_json::to_string_pretty(&stats)?)?;
            return Ok(());
        }
        if let Some(feedback) = session.feedback() {
            writeln!(self.output, "{feedback}")?;
        }
        write!(self.output, "{}", ResultsVm::from(&stats))?;
        Ok(())
    }

    fn ask_next(&mut self) -> Result<NextRound, AppError> {
        writeln!(self.output)?;
        write!(
            self.output,
            "Play again? [y] same settings, [c] change digits, [N] quit: "
        )?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => NextRound::Again,
            "c" | "change" => NextRound::ChangeDigits,
            _ => NextRound::Quit,
        })
    }

    /// Ask for both digit counts until they form a valid config.
    ///
    /// Returns `None` if input ends first.
    fn ask_digits(&mut self) -> Result<Option<DigitConfig>, AppError> {
        loop {
            let Some(first) = self.ask_count("Digits in the first operand (1-6): ")? else {
                return Ok(None);
            };
            let Some(second) = self.ask_count("Digits in the second operand (1-6): ")? else {
                return Ok(None);
            };
            match DigitConfig::new(first, second) {
                Ok(config) => return Ok(Some(config)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn ask_count(&mut self, prompt: &str) -> Result<Option<u8>, AppError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<u8>() {
                Ok(count) => return Ok(Some(count)),
                Err(_) => writeln!(self.output, "Please enter a number from 1 to 6.")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Parses a typed answer; surrounding whitespace and a leading `+` are accepted.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .parse::<i64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::ProblemGenerator;
    use drill_core::time::fixed_clock;
    use services::QUESTION_COUNT;
    use std::io::Cursor;

    fn answers(seed: u64, config: DigitConfig) -> Vec<String> {
        ProblemGenerator::seeded(seed)
            .generate_for(config, QUESTION_COUNT)
            .iter()
            .map(|p| p.product().to_string())
            .collect()
    }

    fn run_with_input(input: &str, options: RunOptions) -> (RunEnd, String, QuizSession) {
        let mut session = QuizSession::new()
            .with_clock(fixed_clock())
            .with_generator(ProblemGenerator::seeded(21));
        let mut output = Vec::new();
        let end = Terminal::new(Cursor::new(input.to_owned()), &mut output, options)
            .run(&mut session, DigitConfig::new(2, 1).unwrap())
            .unwrap();
        (end, String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn parse_answer_accepts_integers_only() {
        assert_eq!(parse_answer(" 84\n"), Some(84));
        assert_eq!(parse_answer("+12"), Some(12));
        assert_eq!(parse_answer("-3"), Some(-3));
        assert_eq!(parse_answer("8.4"), None);
        assert_eq!(parse_answer("abc"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn full_round_prints_results() {
        let input = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let (end, output, session) = run_with_input(&input, RunOptions::default());

        assert_eq!(end, RunEnd::Quit);
        assert!(output.contains("Multiplication drill"));
        assert!(output.contains("Correct:          10 / 10"));
        assert!(output.contains("Play again"));
        assert!(session.is_complete());
    }

    #[test]
    fn non_numeric_input_is_asked_again() {
        let mut lines = answers(21, DigitConfig::new(2, 1).unwrap());
        lines.insert(0, "twelve".to_owned());
        let (_, output, session) = run_with_input(&lines.join("\n"), RunOptions::default());

        assert!(output.contains("Please enter a whole number"));
        assert_eq!(session.stats().unwrap().correct_count(), 10);
    }

    #[test]
    fn eof_mid_quiz_abandons() {
        let (end, output, session) = run_with_input("1\n2\n", RunOptions::default());

        assert_eq!(end, RunEnd::Abandoned);
        assert!(output.contains("Quiz abandoned."));
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn play_again_starts_a_second_round() {
        let first = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let input = format!("{first}\ny\n");
        let (end, output, session) = run_with_input(&input, RunOptions::default());

        // the second round runs out of input right away
        assert_eq!(end, RunEnd::Abandoned);
        assert_eq!(output.matches("Problem 1 / 10").count(), 2);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn change_digits_between_rounds() {
        let first = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let input = format!("{first}\nc\n2\n3\n");
        let (end, output, session) = run_with_input(&input, RunOptions::default());

        assert_eq!(end, RunEnd::Abandoned);
        assert!(output.contains("Settings: 2-digit × 3-digit"));
        assert_eq!(session.config(), DigitConfig::new(2, 3).unwrap());
        assert_eq!(session.current_index(), 0);
        for problem in session.problems() {
            assert!((10..=99).contains(&problem.a), "a = {}", problem.a);
            assert!((100..=999).contains(&problem.b), "b = {}", problem.b);
        }
    }

    #[test]
    fn bad_digit_counts_are_asked_again() {
        let first = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let input = format!("{first}\nc\nmany\n7\n1\n4\n4\n");
        let (_, output, session) = run_with_input(&input, RunOptions::default());

        assert!(output.contains("Please enter a number from 1 to 6."));
        assert!(output.contains("first operand digits must be between 1 and 6, got 7"));
        assert_eq!(session.config(), DigitConfig::new(4, 4).unwrap());
        assert!(session.problems().iter().all(|p| p.a >= 1_000 && p.b >= 1_000));
    }

    #[test]
    fn eof_while_changing_digits_quits() {
        let first = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let input = format!("{first}\nc\n3\n");
        let (end, _, session) = run_with_input(&input, RunOptions::default());

        assert_eq!(end, RunEnd::Quit);
        assert!(session.is_complete());
        assert_eq!(session.config(), DigitConfig::new(2, 1).unwrap());
    }

    #[test]
    fn json_report_ends_the_output() {
        let input = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let options = RunOptions {
            json: true,
            once: false,
        };
        let (end, output, _) = run_with_input(&format!("{input}\ny\n"), options);

        assert_eq!(end, RunEnd::Quit);
        assert!(output.contains("= ? \n{"));
        assert!(output.trim_end().ends_with('}'));
        assert!(!output.contains("Play again"));
        assert_eq!(output.matches("Problem 1 / 10").count(), 1);
    }

    #[test]
    fn json_report_when_requested() {
        let input = answers(21, DigitConfig::new(2, 1).unwrap()).join("\n");
        let options = RunOptions {
            json: true,
            once: true,
        };
        let (end, output, _) = run_with_input(&input, options);

        assert_eq!(end, RunEnd::Quit);
        assert!(output.contains("\"correct_count\": 10"));
        assert!(!output.contains("Play again"));
    }
}
