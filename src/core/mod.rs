//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorTag, colorize};
pub use config::TreeConfig;
pub use error::{InputError, TreeError};
