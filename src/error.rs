//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation needs a contact that is not in the book
    #[error("Contact not found.")]
    NotFound,
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid address book
    #[error("Corrupt address book data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while turning a line of input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line contained no tokens
    #[error("Please enter a command.")]
    Empty,

    /// The line is not valid UTF-8
    #[error("Input must be valid UTF-8.")]
    InvalidEncoding,

    /// The verb is not recognised
    #[error("Invalid command.")]
    Unknown(String),

    /// The verb was given the wrong number of arguments
    #[error("Invalid number of arguments. Usage: {usage}")]
    Arity { verb: String, usage: &'static str },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
