//! Text styling attributes (font family, size, vertical alignment, weight,
//! slant and variant) backed by a restricted CSS syntax.

pub mod parsers;
pub mod style;

pub use parsers::{StyleError, apply_declaration};
pub use style::Style;
