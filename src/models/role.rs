//! Semantic color roles and the fixed-size color set built from them.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::HexColor;

/// Number of semantic roles every palette carries.
pub const ROLE_COUNT: usize = 11;

/// One of the fixed semantic color roles of a palette.
///
/// The declaration order is the role enumeration order: it drives
/// serialization and CSS emission, so output is stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    /// Page background
    Background,
    /// Cards, panels and other raised surfaces
    Surface,
    /// Body text
    Text,
    /// Muted text
    TextSecondary,
    /// Primary brand/action color
    Primary,
    /// Secondary action color
    Secondary,
    /// Highlights
    Accent,
    /// Borders and separators
    Border,
    /// Success state
    Success,
    /// Warning state
    Warning,
    /// Error state
    Error,
}

impl ColorRole {
    /// All roles in enumeration order.
    pub const ALL: [Self; ROLE_COUNT] = [
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::TextSecondary,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Border,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    /// Key used in storage, payloads and CSS property names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::TextSecondary => "text-secondary",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Border => "border",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Hard-coded fallback used when input for this role is missing or invalid.
    #[must_use]
    pub const fn default_hex(self) -> &'static str {
        match self {
            Self::Background => "#1a1a1a",
            Self::Surface => "#2d2d2d",
            Self::Text => "#ffffff",
            Self::TextSecondary => "#b0b0b0",
            Self::Primary => "#4a9eff",
            Self::Secondary => "#ff6b6b",
            Self::Accent => "#ffd93d",
            Self::Border => "#404040",
            Self::Success => "#6bcf7f",
            Self::Warning => "#ffb84d",
            Self::Error => "#ff5252",
        }
    }

    /// Looks up a role from a payload key.
    ///
    /// Keys are trimmed and lowercased first; `text_secondary` is accepted
    /// as well as `text-secondary`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|role| role.key() == normalized)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete assignment of colors to all roles.
///
/// There is no way to build a `ColorSet` with a role missing: it is either
/// [`ColorSet::defaults`] or the output of [`ColorSet::from_raw`], which fills
/// gaps with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    values: [HexColor; ROLE_COUNT],
}

impl ColorSet {
    /// The default role table.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            values: ColorRole::ALL.map(|role| HexColor::from_static(role.default_hex())),
        }
    }

    /// Builds a set from a built-in table given in role enumeration order.
    pub(crate) fn from_static(values: [&'static str; ROLE_COUNT]) -> Self {
        Self {
            values: values.map(HexColor::from_static),
        }
    }

    /// Validates raw `key -> value` input into a complete set.
    ///
    /// This never fails. For each role, a syntactically valid value is kept;
    /// otherwise the role's default is used. Unknown keys are dropped.
    pub fn from_raw<K, V>(raw: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut set = Self::defaults();
        for (key, value) in raw {
            let Some(role) = ColorRole::from_key(key.as_ref()) else {
                continue;
            };
            if let Some(color) = HexColor::parse(value.as_ref()) {
                set.values[role.index()] = color;
            }
        }
        set
    }

    /// Color assigned to `role`.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> &HexColor {
        &self.values[role.index()]
    }

    /// Iterates `(role, color)` pairs in role enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &HexColor)> {
        ColorRole::ALL.into_iter().zip(self.values.iter())
    }

    /// Plain `key -> value` view, ordered by key.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(role, color)| (role.key().to_string(), color.to_string()))
            .collect()
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ROLE_COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.key(), color.as_str())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stored data goes through the same validation as fresh input.
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from_raw(
            raw.iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v))),
        ))
    }
}
