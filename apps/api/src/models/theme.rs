use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters that would let a value break out of a CSS declaration or the
/// surrounding `<style>` element.
const FORBIDDEN_CSS_CHARS: &[char] = &['<', '>', '{', '}', ';', '"', '\\', '`'];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid theme value {value:?}: contains {offending:?}")]
pub struct InvalidCssValue {
    pub value: String,
    pub offending: char,
}

/// A designer-controlled style value (color, gradient, ...).
///
/// Unlike resume content, a `CssValue` is written into the stylesheet without
/// escaping, so construction rejects anything that could terminate the
/// declaration it is placed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssValue(String);

impl CssValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CssValue {
    type Error = InvalidCssValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(offending) = value
            .chars()
            .find(|c| c.is_control() || FORBIDDEN_CSS_CHARS.contains(c))
        {
            return Err(InvalidCssValue { value, offending });
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for CssValue {
    type Error = InvalidCssValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<CssValue> for String {
    fn from(value: CssValue) -> Self {
        value.0
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accent palette applied to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    #[serde(default)]
    pub name: String,
    pub base: CssValue,
    pub gradient: CssValue,
    /// Decorative shape color; reserved for templates with background blobs.
    #[serde(default)]
    pub blob: CssValue,
}
