//! Recursive-descent parser for inline style declarations.
//!
//! Grammar:
//!
//! ```text
//! css         := declaration (';' declaration)* ';'?
//! declaration := property ':' expr
//! property    := [a-zA-Z-]+
//! expr        := (string | [^;'"]+)*
//! string      := "'" [^']* "'" | '"' [^"]* '"'
//! ```
//!
//! Whitespace may surround every token. Inside `expr` each whitespace run
//! outside a string collapses to a single space.

use crate::declaration::Declaration;
use crate::error::{CssError, Interrupt};
use crate::scanner::Scanner;

/// Single-use parser over one style string.
pub struct CssParser {
    scanner: Scanner,
    declarations: Vec<Declaration>,
}

impl CssParser {
    /// Fails with [`CssError::EmptyDocument`] if `css` holds nothing but whitespace.
    pub fn new(css: &str) -> Result<Self, CssError> {
        if css.chars().all(is_css_whitespace) {
            return Err(CssError::EmptyDocument);
        }
        Ok(Self {
            scanner: Scanner::new(css),
            declarations: Vec::new(),
        })
    }

    /// Parses the whole string, returning the declarations in source order.
    pub fn parse(mut self) -> Result<Vec<Declaration>, CssError> {
        self.parse_declaration_list()
            .map_err(Interrupt::into_error)?;
        log::trace!("Parsed {} declaration(s)", self.declarations.len());
        Ok(self.declarations)
    }

    fn parse_declaration_list(&mut self) -> Result<(), Interrupt> {
        self.parse_declaration()?;
        loop {
            if stops_here(self.scanner.skip_whitespace())? {
                return Ok(());
            }
            let position = self.scanner.pos();
            if self.scanner.advance()? != ';' {
                return Err(CssError::MissingSemicolon { position }.into());
            }
            if stops_here(self.scanner.skip_whitespace())? {
                return Ok(());
            }
            self.parse_declaration()?;
        }
    }

    fn parse_declaration(&mut self) -> Result<(), Interrupt> {
        self.scanner.skip_whitespace()?;
        let property = self.parse_property()?;
        self.scanner.skip_whitespace()?;
        let position = self.scanner.pos();
        if self.scanner.advance()? != ':' {
            return Err(CssError::MissingColon { position }.into());
        }
        self.scanner.skip_whitespace()?;
        let value = self.parse_expr()?;
        log::trace!("  {}: {:?}", property, value);
        self.declarations.push(Declaration { property, value });
        Ok(())
    }

    fn parse_property(&mut self) -> Result<String, Interrupt> {
        let mut property = String::new();
        let delimiter = loop {
            let c = self.scanner.advance().map_err(promote_eof)?;
            if !is_nmchar(c) {
                break c;
            }
            property.push(c);
        };
        match delimiter {
            ':' if !property.is_empty() => {
                self.scanner.retreat()?;
                Ok(property)
            }
            c if is_css_whitespace(c) => Ok(property),
            c => Err(CssError::IllegalCharacter {
                character: c,
                position: self.scanner.pos() - 1,
            }
            .into()),
        }
    }

    fn parse_expr(&mut self) -> Result<String, Interrupt> {
        let mut value = String::new();
        let mut pending_space = false;
        loop {
            let c = match self.scanner.advance() {
                Ok(c) => c,
                Err(Interrupt::Eof) => {
                    if pending_space {
                        value.pop();
                        pending_space = false;
                    }
                    if value.is_empty() {
                        return Err(CssError::UnexpectedEof.into());
                    }
                    break;
                }
                Err(e) => return Err(e),
            };
            match c {
                '\'' | '"' => {
                    let literal = self.parse_string(c)?;
                    value.push_str(&literal);
                    pending_space = false;
                }
                ';' => {
                    self.scanner.retreat()?;
                    break;
                }
                c if is_css_whitespace(c) => {
                    if !pending_space {
                        value.push(' ');
                        pending_space = true;
                    }
                }
                c => {
                    value.push(c);
                    pending_space = false;
                }
            }
        }
        if pending_space {
            value.pop();
        }
        Ok(value)
    }

    /// Reads a literal whose opening `quote` was already consumed.
    fn parse_string(&mut self, quote: char) -> Result<String, Interrupt> {
        let mut literal = String::new();
        loop {
            match self.scanner.advance().map_err(promote_eof)? {
                c if c == quote => return Ok(literal),
                c => literal.push(c),
            }
        }
    }
}

/// Parses `css` into its declarations in one call.
pub fn parse_declarations(css: &str) -> Result<Vec<Declaration>, CssError> {
    CssParser::new(css)?.parse()
}

/// Whitespace as the grammar sees it: Unicode `White_Space` plus the ASCII
/// information separators `\x1c`..=`\x1f`.
pub fn is_css_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn is_nmchar(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

fn promote_eof(i: Interrupt) -> Interrupt {
    Interrupt::Fail(i.into_error())
}

/// End of input at a point where the document may legally finish.
fn stops_here(result: Result<(), Interrupt>) -> Result<bool, Interrupt> {
    match result {
        Ok(()) => Ok(false),
        Err(Interrupt::Eof) => Ok(true),
        Err(e) => Err(e),
    }
}
