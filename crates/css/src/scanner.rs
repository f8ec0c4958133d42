//! Character cursor with one character of look-ahead.

use crate::error::{CssError, Interrupt};
use crate::parser::is_css_whitespace;

pub(crate) struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Current cursor position.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the next character and moves past it.
    pub(crate) fn advance(&mut self) -> Result<char, Interrupt> {
        let c = *self.chars.get(self.pos).ok_or(Interrupt::Eof)?;
        self.pos += 1;
        Ok(c)
    }

    /// Steps back over the character returned by the last `advance`.
    pub(crate) fn retreat(&mut self) -> Result<(), Interrupt> {
        if self.pos == 0 {
            return Err(CssError::Internal("Called pushback on pos 0.".to_string()).into());
        }
        self.pos -= 1;
        Ok(())
    }

    /// Leaves the cursor on the next non-whitespace character.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), Interrupt> {
        while is_css_whitespace(self.advance()?) {}
        self.retreat()
    }
}
