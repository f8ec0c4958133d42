//! Parser for a minimal subset of CSS: flat `property: value` lists as found
//! in inline `style` attributes. There are no selectors, comments, escapes or
//! nested blocks.
//!
//! ```
//! use simplestyle_css::{CssParser, Declaration};
//!
//! let decls = CssParser::new("font-family: 'Times New Roman'; font-size: 12pt")?.parse()?;
//! assert_eq!(decls[0], Declaration::new("font-family", "Times New Roman"));
//! assert_eq!(decls[1], Declaration::new("font-size", "12pt"));
//! # Ok::<(), simplestyle_css::CssError>(())
//! ```

pub mod declaration;
pub mod error;
pub mod parser;
mod scanner;

pub use declaration::Declaration;
pub use error::CssError;
pub use parser::{CssParser, is_css_whitespace, parse_declarations};
