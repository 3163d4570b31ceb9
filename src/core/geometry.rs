//! Geometry helpers: row widths, centring and terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{FIXED_LINES, MIN_BODY_WIDTH, ROWS_PER_SEGMENT, SEGMENT_WIDTH_STEP};

/// Number of decorated rows between tip and trunk.
#[inline]
#[must_use]
pub fn body_height(length: u32) -> usize {
    length.saturating_sub(FIXED_LINES) as usize
}

/// Width of body row `row` (0-based): 3, 3, 5, 5, 7, 7, …
#[inline]
#[must_use]
pub fn row_width(row: usize) -> usize {
    MIN_BODY_WIDTH + SEGMENT_WIDTH_STEP * (row / ROWS_PER_SEGMENT)
}

/// Width of the widest body row, or 1 when there is no body at all.
///
/// Always equals `row_width(body_height - 1)` for a non-empty body, so every
/// line of the drawing fits.
#[must_use]
pub fn max_width(body_height: usize) -> usize {
    if body_height == 0 {
        return 1;
    }
    let segments = body_height.div_ceil(ROWS_PER_SEGMENT);
    MIN_BODY_WIDTH + SEGMENT_WIDTH_STEP * (segments - 1)
}

/// Left padding that centres `text_len` characters in `max_width`.
/// Clamped to 0 when the text is wider.
#[inline]
#[must_use]
pub fn centre_padding(max_width: usize, text_len: usize) -> usize {
    max_width.saturating_sub(text_len) / 2
}

/// Columns of the terminal attached to stdout, if any.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}
