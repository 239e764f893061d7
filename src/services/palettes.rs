//! Custom palette persistence and validation.
//!
//! Custom palettes are stored as one JSON object keyed by palette id under
//! [`CUSTOM_PALETTES_KEY`]. Every mutation is a read-modify-write of that
//! object through the injected [`OptionStore`].

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::branding::CUSTOM_PALETTES_KEY;
use crate::catalog::PaletteCatalog;
use crate::error::{PaletteError, PaletteResult};
use crate::models::{ColorSet, Palette, PaletteOrigin, ThemeMode};
use crate::storage::{OptionStore, StorageError};

use super::SelectionStore;

/// Raw `role key -> color value` input, as received from a request.
pub type ColorInput = BTreeMap<String, String>;

/// Validates raw color input into a complete [`ColorSet`].
///
/// Total function: valid values are kept, missing or invalid roles get their
/// defaults and unknown keys are discarded.
pub fn validate_colors(raw: &ColorInput) -> ColorSet {
    ColorSet::from_raw(raw)
}

/// Cleans a palette name for storage and display.
///
/// Trims, drops control characters, and collapses whitespace runs.
///
/// # Examples
///
/// ```
/// # use darkup::services::palettes::sanitize_name;
/// assert_eq!(sanitize_name("  My   Theme\t"), "My Theme");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a palette name into a lowercase, hyphen-separated id fragment.
///
/// # Examples
///
/// ```
/// # use darkup::services::palettes::slugify;
/// assert_eq!(slugify("My Dark Theme!"), "my-dark-theme");
/// assert_eq!(slugify("  Ocean -- Night "), "ocean-night");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "palette".to_string()
    } else {
        slug.to_string()
    }
}

/// CRUD access to user-authored palettes.
#[derive(Clone)]
pub struct PaletteStore {
    storage: Arc<dyn OptionStore>,
    catalog: Arc<PaletteCatalog>,
    selection: SelectionStore,
    clock: fn() -> DateTime<Utc>,
}

impl PaletteStore {
    /// Creates a palette store over `storage`, using `catalog` for built-in lookups.
    pub fn new(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Self {
        Self {
            selection: SelectionStore::new(storage.clone()),
            storage,
            catalog,
            clock: Utc::now,
        }
    }

    /// Replaces the time source used for ids and timestamps.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Loads every stored custom palette, keyed by id.
    ///
    /// Entries that no longer decode as palettes are skipped with a warning.
    /// An empty JSON array is read as an empty mapping.
    pub fn load_all(&self) -> Result<BTreeMap<String, Palette>, StorageError> {
        let raw = match self.storage.get(CUSTOM_PALETTES_KEY)? {
            Some(Value::Object(map)) => map,
            Some(Value::Array(items)) if items.is_empty() => return Ok(BTreeMap::new()),
            Some(Value::Null) | None => return Ok(BTreeMap::new()),
            Some(other) => {
                warn!("Ignoring custom palette store of unexpected shape: {other}");
                return Ok(BTreeMap::new());
            }
        };

        let mut palettes = BTreeMap::new();
        for (id, value) in raw {
            match serde_json::from_value::<Palette>(value) {
                Ok(mut palette) => {
                    // The mapping key is authoritative.
                    palette.id.clone_from(&id);
                    palette.origin = PaletteOrigin::Custom;
                    palettes.insert(id, palette);
                }
                Err(e) => warn!("Skipping unreadable custom palette '{id}': {e}"),
            }
        }

        Ok(palettes)
    }

    fn persist(&self, palettes: &BTreeMap<String, Palette>) -> Result<(), StorageError> {
        self.storage
            .set(CUSTOM_PALETTES_KEY, serde_json::to_value(palettes)?)
    }

    /// All custom palettes, ordered by id.
    pub fn list(&self) -> Result<Vec<Palette>, StorageError> {
        Ok(self.load_all()?.into_values().collect())
    }

    /// Looks up a custom palette by id.
    pub fn get(&self, id: &str) -> Result<Option<Palette>, StorageError> {
        Ok(self.load_all()?.remove(id))
    }

    /// Creates and persists a new custom palette.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Validation`] if the name is empty after trimming or no
    /// colors were supplied. Nothing is written in that case.
    pub fn create(&self, name: &str, colors: &ColorInput, mode: ThemeMode) -> PaletteResult<Palette> {
        let name = Self::validate_input(name, colors)?;
        let now = (self.clock)();

        let mut palettes = self.load_all()?;
        let id = Self::generate_id(&name, now, &palettes);

        let palette = Palette {
            id: id.clone(),
            name,
            origin: PaletteOrigin::Custom,
            mode,
            colors: validate_colors(colors),
            created_at: Some(now),
            updated_at: None,
        };

        palettes.insert(id, palette.clone());
        self.persist(&palettes)?;

        info!("Created custom palette '{}' ({})", palette.name, palette.id);
        Ok(palette)
    }

    /// Overwrites name, colors and mode of an existing custom palette.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NotFound`] if `id` is unknown, [`PaletteError::Validation`]
    /// for the same input problems `create` rejects.
    pub fn update(
        &self,
        id: &str,
        name: &str,
        colors: &ColorInput,
        mode: ThemeMode,
    ) -> PaletteResult<Palette> {
        let mut palettes = self.load_all()?;
        let Some(palette) = palettes.get_mut(id) else {
            return Err(PaletteError::custom_not_found(id));
        };

        let name = Self::validate_input(name, colors)?;
        palette.name = name;
        palette.colors = validate_colors(colors);
        palette.mode = mode;
        palette.updated_at = Some((self.clock)());

        let updated = palette.clone();
        self.persist(&palettes)?;

        info!("Updated custom palette '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Deletes a custom palette.
    ///
    /// Returns `Ok(false)` if `id` is unknown. If the active selection points at
    /// the palette, it is reset to the default before the palette is removed,
    /// so the selection never references a deleted palette.
    pub fn remove(&self, id: &str) -> PaletteResult<bool> {
        let mut palettes = self.load_all()?;
        if palettes.remove(id).is_none() {
            return Ok(false);
        }

        if let Some(selection) = self.selection.load()? {
            if selection.targets_custom(id) {
                info!("Active palette '{id}' is being deleted, resetting selection");
                self.selection.reset()?;
            }
        }

        self.persist(&palettes)?;

        info!("Deleted custom palette {id}");
        Ok(true)
    }

    /// Origin-qualified existence check across the catalog and the store.
    pub fn exists(&self, id: &str, origin: PaletteOrigin) -> bool {
        match origin {
            PaletteOrigin::Builtin => self.catalog.contains(id),
            PaletteOrigin::Custom => match self.get(id) {
                Ok(found) => found.is_some(),
                Err(e) => {
                    warn!("Failed to read custom palettes: {e}");
                    false
                }
            },
        }
    }

    /// Writes an empty mapping if nothing is stored yet.
    pub fn ensure_initialized(&self) -> Result<bool, StorageError> {
        if self.storage.get(CUSTOM_PALETTES_KEY)?.is_some() {
            return Ok(false);
        }
        self.persist(&BTreeMap::new())?;
        Ok(true)
    }

    fn validate_input(name: &str, colors: &ColorInput) -> PaletteResult<String> {
        let name = sanitize_name(name);
        if name.is_empty() {
            return Err(PaletteError::validation("Palette name cannot be empty"));
        }
        if colors.is_empty() {
            return Err(PaletteError::validation(
                "At least one color must be provided",
            ));
        }
        Ok(name)
    }

    /// `custom-<slug>-<unix seconds>`, with `-2`, `-3`, ... on collision.
    fn generate_id(name: &str, now: DateTime<Utc>, existing: &BTreeMap<String, Palette>) -> String {
        let base = format!("custom-{}-{}", slugify(name), now.timestamp());
        if !existing.contains_key(&base) {
            return base;
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !existing.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
