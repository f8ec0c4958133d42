// src/error.rs
use simplestyle_css::CssError;
use simplestyle_style::StyleError;
use thiserror::Error;

/// Top-level error for the library facade and the command line tool.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parsing failed: {0}")]
    Css(#[from] CssError),

    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
