//! Layout parameters derived once from a validated length.

use crate::core::geometry::{body_height, max_width};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub length: u32,
    pub body_height: usize,
    pub max_width: usize,
}

impl TreeConfig {
    /// Heights 0 and 1 both collapse to a lone star of width 1.
    #[must_use]
    pub fn new(length: u32) -> Self {
        let body_height = body_height(length);
        Self {
            length,
            body_height,
            max_width: max_width(body_height),
        }
    }

    /// True when the drawing is just the tip.
    #[inline]
    #[must_use]
    pub fn is_single_star(&self) -> bool {
        self.length <= 1
    }

    /// Number of lines the drawing will contain.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        if self.is_single_star() {
            1
        } else {
            self.body_height + 2
        }
    }
}
