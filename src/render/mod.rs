pub mod frame;
pub mod tree;

pub use frame::{centered_line, write_drawing};
pub use tree::{Drawing, Line, add_baubles, render};
