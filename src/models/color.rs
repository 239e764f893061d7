//! Hex color values with syntax validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Accepts `#RGB` and `#RRGGBB`, either case.
fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").expect("valid hex pattern"))
}

/// A syntactically valid CSS hex color.
///
/// The only way to obtain a `HexColor` is through [`HexColor::parse`] (or
/// deserialization, which goes through the same check), so a value of this type
/// is always safe to place verbatim into emitted CSS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex color in the format "#RGB" or "#RRGGBB".
    ///
    /// Surrounding whitespace is ignored and the digits keep their case.
    /// Returns `None` for anything else, including the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use darkup::models::HexColor;
    ///
    /// assert_eq!(HexColor::parse("#1a1a1a").unwrap().as_str(), "#1a1a1a");
    /// assert_eq!(HexColor::parse(" #FFF ").unwrap().as_str(), "#FFF");
    /// assert!(HexColor::parse("1a1a1a").is_none());
    /// assert!(HexColor::parse("red").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        hex_pattern()
            .is_match(trimmed)
            .then(|| Self(trimmed.to_string()))
    }

    /// Builds a color from a compile-time constant known to be valid.
    ///
    /// Only used for the built-in tables; callers with user input must use
    /// [`HexColor::parse`].
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(hex_pattern().is_match(value), "invalid built-in color {value}");
        Self(value.to_string())
    }

    /// Returns the color as written, e.g. `"#4a9eff"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid hex color '{value}'"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}
