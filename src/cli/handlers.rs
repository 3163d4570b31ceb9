use std::io::Write;

use tracing::{debug, warn};

use crate::{
    core::{
        error::{InputError, TreeError},
        geometry::terminal_width,
    },
    render::{Drawing, render, write_drawing},
};

use super::parse::usage;

/// Render `length` and write the whole drawing to `out`.
pub fn draw<W: Write>(out: &mut W, length: u32) -> Result<(), TreeError> {
    let drawing = render(length);
    warn_if_too_wide(&drawing);
    write_drawing(out, &drawing)?;
    Ok(())
}

/// Print the diagnostic, plus the usage line for count/format faults.
pub fn report<W: Write>(out: &mut W, err: &InputError) -> Result<(), TreeError> {
    debug!(?err, "rejected input");
    writeln!(out, "Input error: {err}")?;
    if err.shows_usage() {
        writeln!(out, "{}", usage())?;
    }
    out.flush()?;
    Ok(())
}

/// The drawing is printed as-is; a too-narrow terminal only gets a log line.
fn warn_if_too_wide(drawing: &Drawing) {
    if let Some(cols) = terminal_width() {
        if drawing.max_width > cols {
            warn!(
                width = drawing.max_width,
                terminal = cols,
                "tree is wider than the terminal, lines will wrap"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(err: &InputError) -> String {
        let mut out = Vec::new();
        report(&mut out, err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn missing_argument_prints_usage() {
        assert_eq!(
            reported(&InputError::MissingArgument),
            "Input error: Missing length argument.\n\
             Usage: ascii-tree <non-negative integer length>\n"
        );
    }

    #[test]
    fn negative_length_has_no_usage() {
        assert_eq!(
            reported(&InputError::NegativeLength { given: -3 }),
            "Input error: Invalid value: length cannot be negative. Given: -3\n"
        );
    }

    #[test]
    fn draw_writes_every_line() {
        let mut out = Vec::new();
        draw(&mut out, 6).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
    }
}
