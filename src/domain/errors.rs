//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as a `DD.MM.YYYY` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}'. Must contain exactly 10 digits",
                phone
            ),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date '{}'. Use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid phone number '123'. Must contain exactly 10 digits"
        );

        let err = ValidationError::InvalidDate("31.02.2024".to_string());
        assert_eq!(err.to_string(), "Invalid date '31.02.2024'. Use DD.MM.YYYY");
    }
}
