//! Random operand and problem generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{DigitConfig, Problem, operand_range};

/// Draws operands uniformly from the range implied by a digit count.
#[derive(Debug, Clone)]
pub struct ProblemGenerator {
    rng: StdRng,
}

impl ProblemGenerator {
    /// Generator seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a reproducible sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random operand with `digits` decimal digits (`1` yields `1..=9`).
    pub fn generate(&mut self, digits: u8) -> u32 {
        self.rng.random_range(operand_range(digits))
    }

    /// `count` independent problems. Duplicates are possible.
    pub fn generate_batch(
        &mut self,
        first_digits: u8,
        second_digits: u8,
        count: usize,
    ) -> Vec<Problem> {
        (0..count)
            .map(|_| {
                let a = self.generate(first_digits);
                let b = self.generate(second_digits);
                Problem::new(a, b)
            })
            .collect()
    }

    /// `count` problems shaped by a validated config.
    pub fn generate_for(&mut self, config: DigitConfig, count: usize) -> Vec<Problem> {
        self.generate_batch(config.first_digits(), config.second_digits(), count)
    }
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal_digits(value: u32) -> usize {
        value.to_string().len()
    }

    #[test]
    fn generated_operands_have_requested_digit_count() {
        let mut generator = ProblemGenerator::seeded(42);
        for digits in 1..=6_u8 {
            for _ in 0..200 {
                let value = generator.generate(digits);
                assert_eq!(decimal_digits(value), usize::from(digits), "value {value}");
            }
        }
    }

    #[test]
    fn single_digit_never_yields_zero() {
        let mut generator = ProblemGenerator::seeded(7);
        for _ in 0..500 {
            let value = generator.generate(1);
            assert!((1..=9).contains(&value));
        }
    }

    #[test]
    fn batch_has_requested_length_and_shape() {
        let mut generator = ProblemGenerator::seeded(1);
        let problems = generator.generate_batch(2, 3, 10);
        assert_eq!(problems.len(), 10);
        for problem in &problems {
            assert!((10..=99).contains(&problem.a));
            assert!((100..=999).contains(&problem.b));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = DigitConfig::new(4, 2).unwrap();
        let first = ProblemGenerator::seeded(99).generate_for(config, 10);
        let second = ProblemGenerator::seeded(99).generate_for(config, 10);
        assert_eq!(first, second);
    }
}
