use serde::{Deserialize, Serialize};

use crate::model::Problem;

/// The outcome of answering one problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub problem: Problem,
    pub submitted: i64,
    pub elapsed_secs: f64,
    pub correct: bool,
}

impl AttemptRecord {
    /// Grades `submitted` against `problem`.
    ///
    /// Negative or non-finite elapsed times are stored as zero.
    #[must_use]
    pub fn grade(problem: Problem, submitted: i64, elapsed_secs: f64) -> Self {
        let elapsed_secs = if elapsed_secs.is_finite() {
            elapsed_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            problem,
            submitted,
            elapsed_secs,
            correct: problem.is_answered_by(submitted),
        }
    }

    #[must_use]
    pub fn expected(&self) -> u64 {
        self.problem.product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_marks_correct_and_wrong() {
        let problem = Problem::new(12, 7);
        let right = AttemptRecord::grade(problem, 84, 2.5);
        let wrong = AttemptRecord::grade(problem, 85, 1.0);

        assert!(right.correct);
        assert!(!wrong.correct);
        assert_eq!(wrong.expected(), 84);
    }

    #[test]
    fn elapsed_is_clamped() {
        let problem = Problem::new(2, 3);
        assert!(AttemptRecord::grade(problem, 6, -1.0).elapsed_secs.abs() < f64::EPSILON);
        assert!(AttemptRecord::grade(problem, 6, f64::NAN).elapsed_secs.abs() < f64::EPSILON);
    }
}
