//! # simplestyle
//!
//! Handling of simple text styles written in a small subset of CSS.
//!
//! ```
//! use simplestyle::{Style, parse_declarations};
//!
//! let decls = parse_declarations("font-family: 'Courier'; font-weight: bold")?;
//! assert_eq!(decls.len(), 2);
//!
//! let style: Style = "font-size: 10pt; font-style: italic".parse()?;
//! assert_eq!(style.size, Some(10.0));
//! assert!(style.italic);
//! assert_eq!(style.to_css(), "font-size: 10pt; font-style: italic");
//! # Ok::<(), simplestyle::Error>(())
//! ```

pub mod error;

pub use error::{Error, Result};
pub use simplestyle_css::{CssError, CssParser, Declaration, parse_declarations};
pub use simplestyle_style::{Style, StyleError, apply_declaration};
