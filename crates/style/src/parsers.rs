//! Value parsers and the property dispatcher that turns parsed CSS
//! declarations into [`Style`] attributes.

use crate::style::Style;
use nom::IResult;
use nom::number::complete::float;
use simplestyle_css::CssError;
use thiserror::Error;

/// Errors that can occur while building a [`Style`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("CSS error: {0}")]
    Css(#[from] CssError),

    #[error("Other units for font-size than points (pt) not supported: '{0}'")]
    UnsupportedUnit(String),

    #[error("Invalid font size '{value}': {reason}")]
    InvalidSize { value: String, reason: String },

    #[error("Unsupported style: {0}")]
    UnsupportedStyle(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_number(input: &str) -> IResult<&str, f32> {
    float(input)
}

/// Runs a nom parser over the trimmed input, requiring it to consume everything.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, String>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        )),
        Err(e) => Err(e.to_string()),
    }
}

/// Parses a `font-size` value such as `12pt` or `10.5 pt` into points.
pub fn parse_font_size(value: &str) -> Result<f32, StyleError> {
    if !value.ends_with("pt") {
        return Err(StyleError::UnsupportedUnit(value.to_string()));
    }
    let number = value.find("pt").map_or(value, |end| &value[..end]);
    run_parser(parse_number, number).map_err(|reason| StyleError::InvalidSize {
        value: value.to_string(),
        reason,
    })
}

/// Parses a boolean attribute value (`true`/`false`, `yes`/`no`, `1`/`0`).
pub fn parse_flag(property: &str, value: &str) -> Result<bool, StyleError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(StyleError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Applies a single CSS declaration to `style`.
///
/// Unknown properties are skipped. Keyword properties only ever switch their
/// flag on; an unrecognized keyword leaves the flag as it was.
pub fn apply_declaration(
    style: &mut Style,
    property: &str,
    value: &str,
) -> Result<(), StyleError> {
    match property {
        "font-family" => style.font_name = Some(value.to_string()),
        "font-size" => style.size = Some(parse_font_size(value)?),
        "vertical-align" => style.valign = Some(value.to_string()),
        "font-weight" => {
            if value == "bold" {
                style.bold = true;
            }
        }
        "font-style" => {
            if value == "italic" {
                style.italic = true;
            }
        }
        "font-variant" => {
            if value == "small-caps" {
                style.small_caps = true;
            }
        }
        _ => log::debug!("Ignoring unsupported property '{}'", property),
    };
    Ok(())
}
