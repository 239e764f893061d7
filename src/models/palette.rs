//! Palettes, display modes and the active selection record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ColorSet;

/// Id of the built-in palette used whenever nothing else is selected.
pub const DEFAULT_PALETTE_ID: &str = "default-dark";

/// Id of the built-in palette used for the light-preference override in auto mode.
pub const LIGHT_PALETTE_ID: &str = "default-light";

/// Display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the visitor's system preference
    #[default]
    Auto,
    /// Always dark
    Dark,
    /// Always light
    Light,
}

impl ThemeMode {
    /// Lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!(
                "Invalid mode '{other}'. Must be 'auto', 'light', or 'dark'"
            )),
        }
    }
}

/// Where a palette comes from.
///
/// Serialized as `"default"` / `"custom"`; `"builtin"` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteOrigin {
    /// Shipped in the static catalog
    #[serde(rename = "default", alias = "builtin")]
    Builtin,
    /// Authored by a user and persisted
    #[serde(rename = "custom")]
    Custom,
}

impl PaletteOrigin {
    /// Wire name of the origin.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "default",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for PaletteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "builtin" => Ok(Self::Builtin),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "Invalid palette origin '{other}'. Must be 'default' or 'custom'"
            )),
        }
    }
}

/// A named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Identifier, unique within its origin
    pub id: String,
    /// Display name
    pub name: String,
    /// Built-in or custom
    #[serde(rename = "type")]
    pub origin: PaletteOrigin,
    /// Intrinsic visual mode (informational only)
    pub mode: ThemeMode,
    /// One color per role
    pub colors: ColorSet,
    /// Creation time (custom palettes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time (custom palettes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The persisted record naming the palette and mode currently in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSelection {
    /// Origin of the referenced palette
    #[serde(rename = "type")]
    pub origin: PaletteOrigin,
    /// Id of the referenced palette
    pub id: String,
    /// Display mode, independent of the palette's own mode
    pub mode: ThemeMode,
}

impl ActiveSelection {
    /// Creates a selection record.
    pub fn new(origin: PaletteOrigin, id: impl Into<String>, mode: ThemeMode) -> Self {
        Self {
            origin,
            id: id.into(),
            mode,
        }
    }

    /// Returns true if this selection points at the given custom palette.
    #[must_use]
    pub fn targets_custom(&self, id: &str) -> bool {
        self.origin == PaletteOrigin::Custom && self.id == id
    }
}

impl Default for ActiveSelection {
    /// `(builtin, default-dark, auto)`
    fn default() -> Self {
        Self::new(PaletteOrigin::Builtin, DEFAULT_PALETTE_ID, ThemeMode::Auto)
    }
}

/// A palette paired with the display mode it should be rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// The palette to render
    pub palette: Palette,
    /// Display mode from the active selection
    pub mode: ThemeMode,
}
