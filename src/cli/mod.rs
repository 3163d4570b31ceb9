mod handlers;
pub mod parse;

use std::{
    env,
    io::{Write, stdout},
};

pub use parse::{Cli, parse_length, usage};

use crate::core::error::TreeError;

/// Parse the process arguments and print either the tree or the input error.
/// Only stdout write failures surface as `Err`.
pub fn run() -> Result<(), TreeError> {
    let cli = Cli::from_raw(env::args_os().skip(1)).unwrap_or_else(|e| e.exit());
    let mut out = stdout().lock();
    run_with(&cli.lengths(), &mut out)
}

/// Same as [`run`] for explicit arguments and sink.
pub fn run_with<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> Result<(), TreeError> {
    match parse_length(args) {
        Ok(length) => handlers::draw(out, length),
        Err(e) => handlers::report(out, &e),
    }
}
