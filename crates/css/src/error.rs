use thiserror::Error;

/// Errors reported by [`CssParser`](crate::CssParser).
///
/// Positions are zero-based character indices into the parsed string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssError {
    #[error("No CSS content given.")]
    EmptyDocument,

    #[error("Unexpected end of file")]
    UnexpectedEof,

    #[error("Expected ':' at pos {position}")]
    MissingColon { position: usize },

    #[error("Expected ';' at pos {position}")]
    MissingSemicolon { position: usize },

    #[error("Illegal character '{character}' at pos {position}.")]
    IllegalCharacter { character: char, position: usize },

    #[error("Internal scanner error: {0}")]
    Internal(String),
}

/// Control signal raised inside the scanner.
///
/// `Eof` is flow control only; the parser decides whether it ends the
/// document or becomes [`CssError::UnexpectedEof`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Interrupt {
    Eof,
    Fail(CssError),
}

impl From<CssError> for Interrupt {
    fn from(e: CssError) -> Self {
        Interrupt::Fail(e)
    }
}

impl Interrupt {
    /// Promotes a stray end-of-input signal to the public error.
    pub(crate) fn into_error(self) -> CssError {
        match self {
            Interrupt::Eof => CssError::UnexpectedEof,
            Interrupt::Fail(e) => e,
        }
    }
}
