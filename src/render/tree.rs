//! Tree layout: maps a height to tagged lines with ornaments placed per row.

use tracing::debug;

use crate::core::{
    color::ColorTag,
    config::TreeConfig,
    constants::{MIN_BODY_WIDTH, ORNAMENT, STAR},
    geometry::row_width,
};

/// One line of the drawing, uncoloured and unpadded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tag: ColorTag,
}

impl Line {
    fn star() -> Self {
        Self {
            text: STAR.to_string(),
            tag: ColorTag::TipOrTrunk,
        }
    }

    fn body(text: String) -> Self {
        Self {
            text,
            tag: ColorTag::Body,
        }
    }

    /// Character count of the raw text.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Fully materialised output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub max_width: usize,
    pub lines: Vec<Line>,
}

impl Drawing {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Build the tree for `length`: tip, `length - 2` decorated rows, trunk.
/// Lengths 0 and 1 give a lone star.
#[must_use]
pub fn render(length: u32) -> Drawing {
    let cfg = TreeConfig::new(length);
    debug!(
        length,
        body_height = cfg.body_height,
        max_width = cfg.max_width,
        "rendering tree"
    );

    let mut lines = Vec::with_capacity(cfg.line_count());
    lines.push(Line::star());
    if cfg.is_single_star() {
        return Drawing {
            max_width: cfg.max_width,
            lines,
        };
    }

    for row in 0..cfg.body_height {
        let base = STAR.to_string().repeat(row_width(row));
        lines.push(Line::body(add_baubles(&base, row)));
    }
    lines.push(Line::star());

    Drawing {
        max_width: cfg.max_width,
        lines,
    }
}

/// Overlay two ornaments mirrored around the centre of `base`.
///
/// `left = row % n`, `right = n - 1 - left`; both land on the middle
/// character when they coincide. Strings shorter than 3 come back unchanged.
#[must_use]
pub fn add_baubles(base: &str, row: usize) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n < MIN_BODY_WIDTH {
        return base.to_owned();
    }
    let left = row % n;
    let right = n - 1 - left;
    chars[left] = ORNAMENT;
    chars[right] = ORNAMENT;
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(d: &Drawing) -> Vec<&str> {
        d.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn tiny_lengths_draw_one_star(#[case] length: u32) {
        let d = render(length);
        assert_eq!(d.max_width, 1);
        assert_eq!(texts(&d), ["*"]);
        assert_eq!(d.lines[0].tag, ColorTag::TipOrTrunk);
    }

    #[test]
    fn length_three() {
        let d = render(3);
        assert_eq!(d.max_width, 3);
        assert_eq!(texts(&d), ["*", "o*o", "*"]);
        assert_eq!(d.lines[1].tag, ColorTag::Body);
    }

    #[test]
    fn length_five() {
        let d = render(5);
        assert_eq!(d.max_width, 5);
        assert_eq!(texts(&d), ["*", "o*o", "*o*", "**o**", "*"]);
    }

    #[test]
    fn length_two_has_no_body() {
        let d = render(2);
        assert_eq!(texts(&d), ["*", "*"]);
        assert!(d.lines.iter().all(|l| l.tag == ColorTag::TipOrTrunk));
    }

    #[rstest]
    #[case("***", 0, "o*o")]
    #[case("***", 1, "*o*")]
    #[case("***", 2, "o*o")]
    #[case("*****", 2, "**o**")]
    #[case("*****", 3, "*o*o*")]
    #[case("*******", 10, "***o***")]
    #[case("**", 0, "**")]
    #[case("", 4, "")]
    fn baubles_mirror_around_centre(
        #[case] base: &str,
        #[case] row: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(add_baubles(base, row), expected);
    }

    #[test]
    fn baubles_keep_length_and_other_stars() {
        for n in 3..15 {
            let base = "*".repeat(n);
            for row in 0..40 {
                let out = add_baubles(&base, row);
                assert_eq!(out.len(), n);
                let left = row % n;
                let right = n - 1 - left;
                for (i, c) in out.chars().enumerate() {
                    if i == left || i == right {
                        assert_eq!(c, 'o');
                    } else {
                        assert_eq!(c, '*');
                    }
                }
            }
        }
    }
}
