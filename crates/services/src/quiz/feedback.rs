use std::fmt;

use drill_core::model::AttemptRecord;

/// Message shown after an answer is submitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    Correct { elapsed_secs: f64 },
    Wrong { expected: u64, elapsed_secs: f64 },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        match self {
            Feedback::Correct { elapsed_secs } | Feedback::Wrong { elapsed_secs, .. } => {
                *elapsed_secs
            }
        }
    }
}

impl From<&AttemptRecord> for Feedback {
    fn from(attempt: &AttemptRecord) -> Self {
        if attempt.correct {
            Feedback::Correct {
                elapsed_secs: attempt.elapsed_secs,
            }
        } else {
            Feedback::Wrong {
                expected: attempt.expected(),
                elapsed_secs: attempt.elapsed_secs,
            }
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct { elapsed_secs } => write!(f, "Correct! ({elapsed_secs:.2}s)"),
            Feedback::Wrong {
                expected,
                elapsed_secs,
            } => write!(f, "Wrong! The answer is {expected}. ({elapsed_secs:.2}s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::Problem;

    #[test]
    fn feedback_messages() {
        let problem = Problem::new(12, 7);
        let right = Feedback::from(&AttemptRecord::grade(problem, 84, 1.234));
        let wrong = Feedback::from(&AttemptRecord::grade(problem, 85, 2.0));

        assert!(right.is_correct());
        assert_eq!(right.to_string(), "Correct! (1.23s)");
        assert!(!wrong.is_correct());
        assert_eq!(wrong.to_string(), "Wrong! The answer is 84. (2.00s)");
        assert!((wrong.elapsed_secs() - 2.0).abs() < f64::EPSILON);
    }
}
