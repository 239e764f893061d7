//! Built-in palette catalog.
//!
//! The catalog is immutable after construction. [`PaletteCatalog::builtin`]
//! returns the palettes shipped with the application; tests can build a
//! catalog with any set of palettes through [`PaletteCatalog::with_palettes`].

use crate::models::{ColorSet, Palette, PaletteOrigin, ThemeMode, ROLE_COUNT};

/// Built-in palette table: id, name, intrinsic mode, colors in role order.
const BUILTIN_PALETTES: [(&str, &str, ThemeMode, [&str; ROLE_COUNT]); 7] = [
    (
        "default-dark",
        "Default Dark",
        ThemeMode::Dark,
        [
            "#1a1a1a", "#2d2d2d", "#ffffff", "#b0b0b0", "#4a9eff", "#ff6b6b", "#ffd93d",
            "#404040", "#6bcf7f", "#ffb84d", "#ff5252",
        ],
    ),
    (
        "default-light",
        "Default Light",
        ThemeMode::Light,
        [
            "#ffffff", "#f5f5f5", "#1a1a1a", "#666666", "#2196f3", "#f44336", "#ffc107",
            "#e0e0e0", "#4caf50", "#ff9800", "#f44336",
        ],
    ),
    (
        "midnight-blue",
        "Midnight Blue",
        ThemeMode::Dark,
        [
            "#0a1929", "#132f4c", "#e7edf4", "#b2bac2", "#3399ff", "#66b2ff", "#5090d3",
            "#1e3a5f", "#1db45a", "#f57c00", "#d32f2f",
        ],
    ),
    (
        "sunset",
        "Sunset",
        ThemeMode::Dark,
        [
            "#2d1b2e", "#422e42", "#fef4f4", "#d1c4c4", "#ff6b9d", "#c94277", "#ffa07a",
            "#553d55", "#4ecdc4", "#ffe66d", "#ff6b6b",
        ],
    ),
    (
        "forest",
        "Forest",
        ThemeMode::Dark,
        [
            "#1a2f23", "#2d4a36", "#e8f5e9", "#c8e6c9", "#66bb6a", "#43a047", "#8bc34a",
            "#3d5a47", "#4caf50", "#ff9800", "#f44336",
        ],
    ),
    (
        "minimal-light",
        "Minimal Light",
        ThemeMode::Light,
        [
            "#fafafa", "#ffffff", "#212121", "#757575", "#000000", "#424242", "#9e9e9e",
            "#e0e0e0", "#43a047", "#fb8c00", "#e53935",
        ],
    ),
    (
        "ocean",
        "Ocean",
        ThemeMode::Light,
        [
            "#e0f2f1", "#ffffff", "#004d40", "#00796b", "#00897b", "#26a69a", "#80cbc4",
            "#b2dfdb", "#66bb6a", "#ffa726", "#ef5350",
        ],
    ),
];

/// Read-only table of built-in palettes, in display order.
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
}

impl PaletteCatalog {
    /// The palettes shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let palettes = BUILTIN_PALETTES
            .iter()
            .map(|(id, name, mode, colors)| Palette {
                id: (*id).to_string(),
                name: (*name).to_string(),
                origin: PaletteOrigin::Builtin,
                mode: *mode,
                colors: ColorSet::from_static(*colors),
                created_at: None,
                updated_at: None,
            })
            .collect();

        Self { palettes }
    }

    /// A catalog holding exactly `palettes`.
    #[must_use]
    pub fn with_palettes(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// Looks up a built-in palette by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    /// Returns true if a palette with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All palettes in display order.
    #[must_use]
    pub fn all(&self) -> &[Palette] {
        &self.palettes
    }

    /// Number of palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
