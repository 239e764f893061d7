//! Inbound mutation requests.
//!
//! Raw payloads arrive with string origins and modes and arbitrary JSON
//! colors. They are parsed into typed values here, then handed to the
//! services. Every outcome maps to an [`Envelope`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::catalog::PaletteCatalog;
use crate::error::{PaletteError, PaletteResult};
use crate::models::{ActiveSelection, Palette, PaletteOrigin, ThemeMode};
use crate::services::{ColorInput, PaletteStore, SelectionStore};
use crate::storage::OptionStore;

// ============================================================================
// Payloads
// ============================================================================

/// Raw selection payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionRequest {
    /// "default" (or "builtin") or "custom"
    #[serde(rename = "type", default)]
    pub origin: String,
    /// Palette id
    #[serde(default)]
    pub id: String,
    /// "auto", "dark" or "light"; empty means auto
    #[serde(default)]
    pub mode: String,
}

/// Raw create/update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// JSON object of role key to color string
    #[serde(default)]
    pub colors: Value,
    /// "auto", "dark" or "light"; empty means auto
    #[serde(default)]
    pub mode: String,
}

/// Uniform response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the request was applied
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// The palette written by create/update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl Envelope {
    /// Success without a payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            palette: None,
        }
    }

    /// Success carrying the written palette.
    pub fn with_palette(message: impl Into<String>, palette: Palette) -> Self {
        Self {
            success: true,
            message: message.into(),
            palette: Some(palette),
        }
    }

    /// Failure built from an error.
    pub fn failure(error: &PaletteError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            palette: None,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a mode string; empty input means [`ThemeMode::Auto`].
pub fn parse_mode(raw: &str) -> PaletteResult<ThemeMode> {
    if raw.trim().is_empty() {
        return Ok(ThemeMode::Auto);
    }
    raw.parse().map_err(PaletteError::Validation)
}

/// Parses an origin string.
pub fn parse_origin(raw: &str) -> PaletteResult<PaletteOrigin> {
    raw.parse().map_err(PaletteError::Validation)
}

/// Extracts color input from arbitrary JSON.
///
/// Every key is kept. Non-string values become an empty string, which fails
/// hex validation so the role falls back to its default. `null` yields an
/// empty map; any other non-object is rejected.
pub fn parse_colors(raw: &Value) -> PaletteResult<ColorInput> {
    match raw {
        Value::Null => Ok(ColorInput::new()),
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), value.as_str().unwrap_or_default().to_string()))
            .collect()),
        _ => Err(PaletteError::validation("Colors must be an object")),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Applies inbound requests to the stores.
#[derive(Clone)]
pub struct ThemeRequests {
    palettes: PaletteStore,
    selection: SelectionStore,
}

impl ThemeRequests {
    /// Creates handlers over `storage` and `catalog`.
    pub fn new(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Self {
        Self {
            palettes: PaletteStore::new(storage.clone(), catalog),
            selection: SelectionStore::new(storage),
        }
    }

    /// Persists the active selection after checking the target exists.
    pub fn save_selection(&self, request: &SelectionRequest) -> PaletteResult<Envelope> {
        let origin = parse_origin(&request.origin)?;
        let mode = parse_mode(&request.mode)?;
        let id = request.id.trim();
        if id.is_empty() {
            return Err(PaletteError::validation("Palette id cannot be empty"));
        }
        if !self.palettes.exists(id, origin) {
            return Err(PaletteError::NotFound {
                origin,
                id: id.to_string(),
            });
        }

        self.selection
            .save(&ActiveSelection::new(origin, id, mode))?;
        Ok(Envelope::ok("Theme preference saved successfully"))
    }

    /// Creates a custom palette.
    pub fn save_custom_palette(&self, request: &PaletteRequest) -> PaletteResult<Envelope> {
        let colors = parse_colors(&request.colors)?;
        let mode = parse_mode(&request.mode)?;
        let palette = self.palettes.create(&request.name, &colors, mode)?;
        Ok(Envelope::with_palette(
            "Custom theme saved successfully",
            palette,
        ))
    }

    /// Replaces name, colors and mode of a custom palette.
    pub fn update_custom_palette(&self, id: &str, request: &PaletteRequest) -> PaletteResult<Envelope> {
        let colors = parse_colors(&request.colors)?;
        let mode = parse_mode(&request.mode)?;
        let palette = self.palettes.update(id, &request.name, &colors, mode)?;
        Ok(Envelope::with_palette(
            "Custom theme updated successfully",
            palette,
        ))
    }

    /// Deletes a custom palette. Unknown ids are [`PaletteError::NotFound`].
    pub fn delete_custom_palette(&self, id: &str) -> PaletteResult<Envelope> {
        if self.palettes.remove(id)? {
            Ok(Envelope::ok("Custom theme deleted successfully"))
        } else {
            Err(PaletteError::custom_not_found(id))
        }
    }
}
