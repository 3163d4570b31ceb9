//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Rejected command-line input. Messages carry no `Input error:` prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing length argument.")]
    MissingArgument,
    #[error("Too many arguments. Only one number is expected.")]
    TooManyArguments,
    #[error("Wrong format: length must be an integer number. Given: {given}")]
    WrongFormat { given: String },
    #[error("Invalid value: length cannot be negative. Given: {given}")]
    NegativeLength { given: i32 },
}

impl InputError {
    /// Argument-count and format faults are followed by the usage line.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        !matches!(self, Self::NegativeLength { .. })
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
