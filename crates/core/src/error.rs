use thiserror::Error;

use crate::model::DigitConfigError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    DigitConfig(#[from] DigitConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DigitConfig;

    fn load(first: u8, second: u8) -> Result<DigitConfig, Error> {
        Ok(DigitConfig::new(first, second)?)
    }

    #[test]
    fn config_errors_pass_through_unchanged() {
        let err = load(1, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::DigitConfig(DigitConfigError::InvalidSecondDigits(0))
        ));
        assert_eq!(
            err.to_string(),
            "second operand digits must be between 1 and 6, got 0"
        );
    }
}
