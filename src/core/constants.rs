//! A collection of constants.

/// Glyph used for the tip, the trunk and the body filler
pub const STAR: char = '*';
/// Glyph overlaid on body rows
pub const ORNAMENT: char = 'o';

/// The first body segment is 3 characters wide
pub const MIN_BODY_WIDTH: usize = 3;
/// Each segment is 2 characters wider than the previous one
pub const SEGMENT_WIDTH_STEP: usize = 2;
/// Two consecutive body rows share one width
pub const ROWS_PER_SEGMENT: usize = 2;

/// Tip plus trunk
pub const FIXED_LINES: u32 = 2;

/// Binary name shown in the usage line
pub const PROGRAM_NAME: &str = "ascii-tree";
