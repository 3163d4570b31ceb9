//! Public-facing crate root – re-exports.

pub mod cli;
pub mod core;
pub mod render;

pub use core::{
    color::{AnsiCode, ColorTag, colorize},
    config::TreeConfig,
    error::{InputError, TreeError},
};

pub use render::{Drawing, Line, add_baubles, render, write_drawing};

