/// Aggregated view of quiz progress, useful for rendering a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// Share of answered questions in `0.0..=1.0`. Zero for an empty quiz.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.answered as f64 / self.total as f64;
        fraction
    }
}
