//! ANSI colour wrapper plus the line tag → colour mapping.

use std::fmt;

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnsiCode(&'static str);

impl AnsiCode {
    #[must_use]
    pub const fn green() -> Self {
        Self("\x1b[32m")
    }
    #[must_use]
    pub const fn yellow() -> Self {
        Self("\x1b[33m")
    }
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self("\x1b[0m")
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- ColorTag ---

/// Semantic colour of a drawn line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    /// The single-star top and bottom lines
    TipOrTrunk,
    /// Decorated rows in between
    Body,
}

impl ColorTag {
    #[must_use]
    pub const fn code(self) -> AnsiCode {
        match self {
            Self::TipOrTrunk => AnsiCode::yellow(),
            Self::Body => AnsiCode::green(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_to_fixed_colours() {
        assert_eq!(ColorTag::TipOrTrunk.code().as_str(), "\x1b[33m");
        assert_eq!(ColorTag::Body.code().as_str(), "\x1b[32m");
    }

    #[test]
    fn colorize_wraps_with_reset() {
        assert_eq!(
            colorize(AnsiCode::green(), "o*o"),
            "\x1b[32mo*o\x1b[0m".to_string()
        );
    }
}
