use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest digit count an operand may be configured with.
pub const MIN_DIGITS: u8 = 1;
/// Largest digit count an operand may be configured with.
pub const MAX_DIGITS: u8 = 6;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DigitConfigError {
    #[error("first operand digits must be between 1 and 6, got {0}")]
    InvalidFirstDigits(u8),

    #[error("second operand digits must be between 1 and 6, got {0}")]
    InvalidSecondDigits(u8),
}

//
// ─── DIGIT CONFIG ──────────────────────────────────────────────────────────────
//

/// How many decimal digits each operand of a problem has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDigitConfig")]
pub struct DigitConfig {
    first_digits: u8,
    second_digits: u8,
}

#[derive(Deserialize)]
struct RawDigitConfig {
    first_digits: u8,
    second_digits: u8,
}

impl TryFrom<RawDigitConfig> for DigitConfig {
    type Error = DigitConfigError;

    fn try_from(raw: RawDigitConfig) -> Result<Self, Self::Error> {
        Self::new(raw.first_digits, raw.second_digits)
    }
}

impl DigitConfig {
    /// Creates a validated digit configuration.
    ///
    /// # Errors
    ///
    /// Returns `DigitConfigError` if either count is outside `1..=6`.
    pub fn new(first_digits: u8, second_digits: u8) -> Result<Self, DigitConfigError> {
        if !digits_in_range(first_digits) {
            return Err(DigitConfigError::InvalidFirstDigits(first_digits));
        }
        if !digits_in_range(second_digits) {
            return Err(DigitConfigError::InvalidSecondDigits(second_digits));
        }
        Ok(Self {
            first_digits,
            second_digits,
        })
    }

    #[must_use]
    pub fn first_digits(&self) -> u8 {
        self.first_digits
    }

    #[must_use]
    pub fn second_digits(&self) -> u8 {
        self.second_digits
    }
}

impl Default for DigitConfig {
    fn default() -> Self {
        Self {
            first_digits: MIN_DIGITS,
            second_digits: MIN_DIGITS,
        }
    }
}

impl fmt::Display for DigitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-digit × {}-digit", self.first_digits, self.second_digits)
    }
}

#[must_use]
pub fn digits_in_range(digits: u8) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

/// The inclusive operand range for a digit count.
///
/// One digit maps to `1..=9`; zero is never produced. Counts outside `1..=6` are
/// clamped into that range.
#[must_use]
pub fn operand_range(digits: u8) -> RangeInclusive<u32> {
    let digits = digits.clamp(MIN_DIGITS, MAX_DIGITS);
    if digits == 1 {
        return 1..=9;
    }
    let low = 10_u32.pow(u32::from(digits) - 1);
    let high = 10_u32.pow(u32::from(digits)) - 1;
    low..=high
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// A single multiplication exercise `a × b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub a: u32,
    pub b: u32,
}

impl Problem {
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// The expected answer. Six-digit operands stay well inside `u64`.
    #[must_use]
    pub fn product(&self) -> u64 {
        u64::from(self.a) * u64::from(self.b)
    }

    /// Whether `value` is the correct answer to this problem.
    #[must_use]
    pub fn is_answered_by(&self, value: i64) -> bool {
        u64::try_from(value).is_ok_and(|v| v == self.product())
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.a, self.b)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_out_of_range_digits() {
        assert_eq!(
            DigitConfig::new(0, 1).unwrap_err(),
            DigitConfigError::InvalidFirstDigits(0)
        );
        assert_eq!(
            DigitConfig::new(3, 7).unwrap_err(),
            DigitConfigError::InvalidSecondDigits(7)
        );
        assert!(DigitConfig::new(6, 6).is_ok());
    }

    #[test]
    fn default_config_is_single_digit() {
        let config = DigitConfig::default();
        assert_eq!(config.first_digits(), 1);
        assert_eq!(config.second_digits(), 1);
    }

    #[test]
    fn config_deserialization_validates() {
        let ok: DigitConfig =
            serde_json::from_str(r#"{"first_digits":2,"second_digits":3}"#).unwrap();
        assert_eq!(ok, DigitConfig::new(2, 3).unwrap());

        let bad = serde_json::from_str::<DigitConfig>(r#"{"first_digits":9,"second_digits":1}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn operand_ranges_follow_digit_counts() {
        assert_eq!(operand_range(1), 1..=9);
        assert_eq!(operand_range(2), 10..=99);
        assert_eq!(operand_range(6), 100_000..=999_999);
        assert_eq!(operand_range(0), 1..=9);
        assert_eq!(operand_range(9), 100_000..=999_999);
    }

    #[test]
    fn answer_check_uses_product() {
        let problem = Problem::new(12, 7);
        assert_eq!(problem.product(), 84);
        assert!(problem.is_answered_by(84));
        assert!(!problem.is_answered_by(85));
        assert!(!problem.is_answered_by(-84));
        assert_eq!(problem.prompt(), "12 × 7 = ?");
    }

    #[test]
    fn largest_product_does_not_overflow() {
        let problem = Problem::new(999_999, 999_999);
        assert_eq!(problem.product(), 999_998_000_001);
        assert!(problem.is_answered_by(999_998_000_001));
    }
}
