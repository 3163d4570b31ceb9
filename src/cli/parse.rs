use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::core::{constants::PROGRAM_NAME, error::InputError};

/// Top-level CLI structure.
///
/// Help and version flags are off: every token, `-3` and `--` included, is
/// a length candidate and goes through [`parse_length`].
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    about = "Draw a coloured ASCII Christmas tree",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Tree height in lines
    #[arg(value_name = "LENGTH", value_parser = clap::value_parser!(OsString))]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse raw process arguments (without the binary name).
    ///
    /// A leading escape is injected so clap never interprets a token itself;
    /// a user-supplied `--` then arrives as an ordinary value.
    pub fn from_raw<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from(PROGRAM_NAME), OsString::from("--")]
            .into_iter()
            .chain(raw.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }

    /// Arguments as text; invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn lengths(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// `Usage: ascii-tree <non-negative integer length>`
#[must_use]
pub fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} <non-negative integer length>")
}

/// Exactly one argument, a 32-bit integer, not negative.
pub fn parse_length<S: AsRef<str>>(args: &[S]) -> Result<u32, InputError> {
    let raw = match args {
        [] => return Err(InputError::MissingArgument),
        [one] => one.as_ref(),
        _ => return Err(InputError::TooManyArguments),
    };

    let value = lexical_core::parse::<i32>(raw.as_bytes()).map_err(|e| {
        debug!(raw, error = ?e, "length is not an integer");
        InputError::WrongFormat {
            given: raw.to_owned(),
        }
    })?;

    u32::try_from(value).map_err(|_| InputError::NegativeLength { given: value })
}
