//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing a domain value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
