//! The text style model.

use crate::parsers::{StyleError, apply_declaration, parse_flag};
use serde::{Deserialize, Serialize};
use simplestyle_css::{CssError, Declaration, is_css_whitespace, parse_declarations};
use std::fmt;
use std::str::FromStr;

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    /// Font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valign: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub small_caps: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_valign(mut self, valign: impl Into<String>) -> Self {
        self.valign = Some(valign.into());
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_small_caps(mut self, small_caps: bool) -> Self {
        self.small_caps = small_caps;
        self
    }

    /// Sets an attribute by its short name: `fontname`, `size`, `valign`,
    /// `bold`, `italics` or `smallcaps`.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        match name {
            "fontname" => self.font_name = Some(value.to_string()),
            "size" => {
                let size = value
                    .trim()
                    .parse::<f32>()
                    .map_err(|e| StyleError::InvalidSize {
                        value: value.to_string(),
                        reason: e.to_string(),
                    })?;
                self.size = Some(size);
            }
            "valign" => self.valign = Some(value.to_string()),
            "bold" => self.bold = parse_flag(name, value)?,
            "italics" => self.italic = parse_flag(name, value)?,
            "smallcaps" => self.small_caps = parse_flag(name, value)?,
            _ => return Err(StyleError::UnsupportedStyle(name.to_string())),
        }
        Ok(())
    }

    /// Restores every attribute to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reads the supported properties from a CSS declaration list.
    ///
    /// Unless `merge` is set the style is reset first. An empty or blank
    /// `css` string leaves the style untouched. Unsupported properties are
    /// discarded silently.
    ///
    /// Declarations are applied one by one, so if a later one fails (such as
    /// `font-size: 1em`) the style keeps the reset and every declaration
    /// applied before it.
    pub fn from_css(&mut self, css: &str, merge: bool) -> Result<(), StyleError> {
        let declarations = match parse_declarations(css) {
            Ok(declarations) => declarations,
            Err(CssError::EmptyDocument) => {
                log::debug!("No style declarations given; style left unchanged");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if !merge {
            self.reset();
        }
        self.apply_declarations(&declarations)
    }

    /// Applies declarations in order; later ones override earlier ones.
    pub fn apply_declarations(&mut self, declarations: &[Declaration]) -> Result<(), StyleError> {
        for declaration in declarations {
            apply_declaration(self, &declaration.property, &declaration.value)?;
        }
        Ok(())
    }

    /// Builds a style from already parsed declarations.
    pub fn from_declarations(declarations: &[Declaration]) -> Result<Self, StyleError> {
        let mut style = Self::default();
        style.apply_declarations(declarations)?;
        Ok(style)
    }

    /// Serializes the set attributes as CSS declarations.
    ///
    /// Values are quoted where needed so that parsing the output yields an
    /// equal style.
    pub fn to_css(&self) -> String {
        let mut statements = Vec::new();
        let mut ends_empty = false;
        if let Some(name) = &self.font_name {
            statements.push(format!("font-family: {}", quote(name)));
            ends_empty = name.is_empty();
        }
        if let Some(size) = self.size {
            statements.push(format!("font-size: {}pt", size));
            ends_empty = false;
        }
        if let Some(valign) = &self.valign {
            if is_plain(valign) {
                statements.push(format!("vertical-align: {}", valign));
            } else {
                statements.push(format!("vertical-align: {}", quote(valign)));
            }
            ends_empty = valign.is_empty();
        }
        if self.bold {
            statements.push("font-weight: bold".to_string());
            ends_empty = false;
        }
        if self.italic {
            statements.push("font-style: italic".to_string());
            ends_empty = false;
        }
        if self.small_caps {
            statements.push("font-variant: small-caps".to_string());
            ends_empty = false;
        }
        let mut css = statements.join("; ");
        // An empty value at end of input does not parse.
        if ends_empty {
            css.push(';');
        }
        css
    }
}

/// True if `value` survives the parser unquoted.
fn is_plain(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(' ')
        && !value.ends_with(' ')
        && !value.contains("  ")
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '\'' | '"') || (c != ' ' && is_css_whitespace(c)))
}

/// Wraps `value` in string literals, switching delimiter whenever the value
/// contains the current one. Adjacent literals concatenate when parsed.
fn quote(value: &str) -> String {
    let mut delimiter = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        if c == delimiter {
            out.push(delimiter);
            delimiter = if delimiter == '"' { '\'' } else { '"' };
            out.push(delimiter);
        }
        out.push(c);
    }
    out.push(delimiter);
    out
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(css: &str) -> Result<Self, Self::Err> {
        let mut style = Style::default();
        style.from_css(css, false)?;
        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = &self.font_name {
            parts.push(name.clone());
        }
        if let Some(size) = self.size {
            parts.push(format!("{}pt", size));
        }
        if let Some(valign) = &self.valign {
            parts.push(valign.clone());
        }
        if self.bold {
            parts.push("bold".to_string());
        }
        if self.italic {
            parts.push("italics".to_string());
        }
        if self.small_caps {
            parts.push("smallcaps".to_string());
        }
        write!(f, "Style({})", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_style() -> Style {
        Style::new()
            .with_font_name("Times New Roman")
            .with_size(12.5)
            .with_valign("super")
            .with_bold(true)
            .with_italic(true)
            .with_small_caps(true)
    }

    #[test]
    fn test_from_css_reads_supported_properties() {
        let style: Style = "font-family: \"Times New Roman\"; font-size: 12.5pt; \
                            vertical-align: super; font-weight: bold; \
                            font-style: italic; font-variant: small-caps"
            .parse()
            .unwrap();
        assert_eq!(style, full_style());
    }

    #[test]
    fn test_from_css_resets_unless_merging() {
        let mut style = Style::new().with_bold(true).with_size(9.0);
        style.from_css("font-family: Arial", false).unwrap();
        assert_eq!(style, Style::new().with_font_name("Arial"));

        let mut style = Style::new().with_bold(true);
        style.from_css("font-family: Arial", true).unwrap();
        assert_eq!(style, Style::new().with_font_name("Arial").with_bold(true));
    }

    #[test]
    fn test_from_css_later_declaration_wins() {
        let style: Style = "font-size: 10pt; font-size: 14pt".parse().unwrap();
        assert_eq!(style.size, Some(14.0));
    }

    #[test]
    fn test_from_css_empty_is_noop() {
        let mut style = full_style();
        style.from_css("", false).unwrap();
        style.from_css("  \n ", false).unwrap();
        assert_eq!(style, full_style());
    }

    #[test]
    fn test_from_css_propagates_parse_errors() {
        let mut style = Style::new();
        assert_eq!(
            style.from_css("font-size 12pt", false),
            Err(StyleError::Css(CssError::MissingColon { position: 10 }))
        );
        assert!(matches!(
            style.from_css("font-size: 12em", false),
            Err(StyleError::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Style::new().to_css(), "");
        assert_eq!(
            full_style().to_css(),
            "font-family: \"Times New Roman\"; font-size: 12.5pt; vertical-align: super; \
             font-weight: bold; font-style: italic; font-variant: small-caps"
        );
    }

    #[test]
    fn test_css_round_trip() {
        let style = full_style();
        let reparsed: Style = style.to_css().parse().unwrap();
        assert_eq!(reparsed, style);

        let quoted = Style::new().with_font_name("A; 'B'");
        let reparsed: Style = quoted.to_css().parse().unwrap();
        assert_eq!(reparsed, quoted);
    }

    #[test]
    fn test_quote_picks_delimiter() {
        assert_eq!(quote("Arial"), "\"Arial\"");
        assert_eq!(quote("Say \"Hi\""), "'Say \"Hi\"'");
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("it's \"x\""), "\"it's \"'\"x\"'");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_to_css_quotes_valign_only_when_needed() {
        assert_eq!(Style::new().with_valign("super").to_css(), "vertical-align: super");
        assert_eq!(Style::new().with_valign("a b").to_css(), "vertical-align: a b");
        assert_eq!(Style::new().with_valign("a;b").to_css(), "vertical-align: \"a;b\"");
        assert_eq!(Style::new().with_valign(" a\tb").to_css(), "vertical-align: \" a\tb\"");
        assert_eq!(Style::new().with_valign("").to_css(), "vertical-align: \"\";");
    }

    #[test]
    fn test_failed_from_css_keeps_earlier_declarations() {
        let mut style = full_style();
        assert!(style.from_css("font-family: Arial; font-size: 1em; font-weight: bold", false).is_err());
        assert_eq!(style, Style::new().with_font_name("Arial"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Style::new().to_string(), "Style()");
        assert_eq!(
            full_style().to_string(),
            "Style(Times New Roman 12.5pt super bold italics smallcaps)"
        );
    }

    #[test]
    fn test_set_attribute() {
        let mut style = Style::new();
        style.set_attribute("fontname", "Courier").unwrap();
        style.set_attribute("size", "11").unwrap();
        style.set_attribute("italics", "true").unwrap();
        assert_eq!(
            style,
            Style::new().with_font_name("Courier").with_size(11.0).with_italic(true)
        );
        assert_eq!(
            style.set_attribute("color", "red"),
            Err(StyleError::UnsupportedStyle("color".to_string()))
        );
        assert!(matches!(
            style.set_attribute("size", "big"),
            Err(StyleError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_serde_skips_unset_fields() {
        let json = serde_json::to_value(Style::new().with_font_name("Arial").with_bold(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fontName": "Arial",
                "bold": true,
                "italic": false,
                "smallCaps": false
            })
        );
        let back: Style = serde_json::from_value(json).unwrap();
        assert_eq!(back, Style::new().with_font_name("Arial").with_bold(true));
    }
}
