//! Turns a [`Drawing`] into padded, coloured terminal text.
//!
//! Every line is left-padded to sit centred in the drawing's `max_width`,
//! then wrapped in its colour and a reset. The whole frame is built in one
//! buffer and written with a single `write_all`.

use std::{fmt, io::Write};

use crate::{
    core::{color::colorize, geometry::centre_padding},
    render::tree::{Drawing, Line},
};

/// Append `line` centred in `width`, coloured, with a trailing newline.
fn push_centered(buf: &mut String, line: &Line, width: usize) {
    let pad = centre_padding(width, line.width());
    buf.extend(std::iter::repeat_n(' ', pad));
    buf.push_str(&colorize(line.tag.code(), &line.text));
    buf.push('\n');
}

/// Single line as it appears on screen, without the newline.
#[must_use]
pub fn centered_line(line: &Line, width: usize) -> String {
    let mut buf = String::new();
    push_centered(&mut buf, line, width);
    buf.pop();
    buf
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        for line in &self.lines {
            push_centered(&mut buf, line, self.max_width);
        }
        f.write_str(&buf)
    }
}

/// Write the complete frame to `out` and flush.
pub fn write_drawing<W: Write>(out: &mut W, drawing: &Drawing) -> std::io::Result<()> {
    out.write_all(drawing.to_string().as_bytes())?;
    out.flush()
}
