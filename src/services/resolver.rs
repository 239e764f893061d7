//! Active theme resolution.
//!
//! Resolution is a pure read: selection -> palette lookup. It is performed on
//! every render and never cached, so it always reflects the latest persisted
//! state. It never fails either. An unreadable selection counts as the
//! default one; an unreadable or missing palette yields "no theme" and the
//! caller skips CSS injection.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::PaletteCatalog;
use crate::models::{ActiveSelection, ColorSet, Palette, PaletteOrigin, ResolvedTheme, ThemeMode};
use crate::storage::OptionStore;

use super::{PaletteStore, SelectionStore};

/// Summary of the active theme handed to client-side code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentThemeInfo {
    /// Origin of the selected palette
    #[serde(rename = "type")]
    pub origin: PaletteOrigin,
    /// Id of the selected palette
    pub id: String,
    /// Display mode
    pub mode: ThemeMode,
    /// Palette name, or "Unknown" when the palette is missing
    pub name: String,
    /// Palette colors; serialized as an empty object when the palette is missing
    #[serde(serialize_with = "colors_or_empty")]
    pub colors: Option<ColorSet>,
}

#[allow(clippy::ref_option)]
fn colors_or_empty<S: Serializer>(colors: &Option<ColorSet>, serializer: S) -> Result<S::Ok, S::Error> {
    match colors {
        Some(colors) => colors.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Turns the active selection into a concrete palette and mode.
#[derive(Clone)]
pub struct ThemeResolver {
    catalog: Arc<PaletteCatalog>,
    palettes: PaletteStore,
    selection: SelectionStore,
}

impl ThemeResolver {
    /// Creates a resolver reading from `storage` and `catalog`.
    pub fn new(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Self {
        Self {
            palettes: PaletteStore::new(storage.clone(), catalog.clone()),
            selection: SelectionStore::new(storage),
            catalog,
        }
    }

    /// Resolves the persisted selection, substituting the default when none is stored.
    ///
    /// Returns `None` when the selected palette does not exist.
    pub fn resolve_active(&self) -> Option<ResolvedTheme> {
        self.resolve(&self.selection.current())
    }

    /// Resolves an explicit selection.
    pub fn resolve(&self, selection: &ActiveSelection) -> Option<ResolvedTheme> {
        let palette = self.lookup(selection)?;
        Some(ResolvedTheme {
            palette,
            mode: selection.mode,
        })
    }

    /// Describes the active selection for the client widget.
    pub fn current_info(&self) -> CurrentThemeInfo {
        let selection = self.selection.current();
        let palette = self.lookup(&selection);

        CurrentThemeInfo {
            origin: selection.origin,
            id: selection.id,
            mode: selection.mode,
            name: palette
                .as_ref()
                .map_or_else(|| "Unknown".to_string(), |p| p.name.clone()),
            colors: palette.map(|p| p.colors),
        }
    }

    fn lookup(&self, selection: &ActiveSelection) -> Option<Palette> {
        let found = match selection.origin {
            PaletteOrigin::Builtin => self.catalog.get(&selection.id).cloned(),
            PaletteOrigin::Custom => match self.palettes.get(&selection.id) {
                Ok(palette) => palette,
                Err(e) => {
                    warn!("Failed to read custom palettes during resolution: {e}");
                    None
                }
            },
        };

        if found.is_none() {
            debug!(
                "Selected palette {} '{}' not found, rendering without theme",
                selection.origin, selection.id
            );
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::{ACTIVE_SELECTION_KEY, CUSTOM_PALETTES_KEY};
    use crate::models::{ColorRole, DEFAULT_PALETTE_ID};
    use crate::services::palettes::ColorInput;
    use crate::storage::{MemoryStore, StorageError};

    fn setup() -> (Arc<MemoryStore>, ThemeResolver, PaletteStore, SelectionStore) {
        let storage = Arc::new(MemoryStore::new());
        let catalog = Arc::new(PaletteCatalog::builtin());
        let resolver = ThemeResolver::new(storage.clone(), catalog.clone());
        let palettes = PaletteStore::new(storage.clone(), catalog);
        let selection = SelectionStore::new(storage.clone());
        (storage, resolver, palettes, selection)
    }

    #[test]
    fn test_resolve_default_when_nothing_stored() {
        let (_, resolver, _, _) = setup();
        let resolved = resolver.resolve_active().unwrap();
        assert_eq!(resolved.palette.id, DEFAULT_PALETTE_ID);
        assert_eq!(resolved.mode, ThemeMode::Auto);
    }

    #[test]
    fn test_resolve_builtin_selection() {
        let (_, resolver, _, selection) = setup();
        selection
            .save(&ActiveSelection::new(PaletteOrigin::Builtin, "sunset", ThemeMode::Dark))
            .unwrap();

        let resolved = resolver.resolve_active().unwrap();
        assert_eq!(resolved.palette.name, "Sunset");
        assert_eq!(resolved.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_display_mode_independent_of_palette_mode() {
        let (_, resolver, _, selection) = setup();
        selection
            .save(&ActiveSelection::new(PaletteOrigin::Builtin, "ocean", ThemeMode::Dark))
            .unwrap();

        let resolved = resolver.resolve_active().unwrap();
        assert_eq!(resolved.palette.mode, ThemeMode::Light);
        assert_eq!(resolved.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_custom_selection_sees_latest_state() {
        let (_, resolver, palettes, selection) = setup();
        let input: ColorInput = [("background".to_string(), "#010101".to_string())].into();
        let created = palettes.create("Mine", &input, ThemeMode::Dark).unwrap();
        selection
            .save(&ActiveSelection::new(PaletteOrigin::Custom, &created.id, ThemeMode::Light))
            .unwrap();

        let first = resolver.resolve_active().unwrap();
        assert_eq!(first.palette.colors.get(ColorRole::Background).as_str(), "#010101");

        let changed: ColorInput = [("background".to_string(), "#020202".to_string())].into();
        palettes.update(&created.id, "Mine", &changed, ThemeMode::Dark).unwrap();

        let second = resolver.resolve_active().unwrap();
        assert_eq!(second.palette.colors.get(ColorRole::Background).as_str(), "#020202");
    }

    #[test]
    fn test_missing_palette_resolves_to_none() {
        let (_, resolver, _, selection) = setup();
        selection
            .save(&ActiveSelection::new(PaletteOrigin::Custom, "custom-gone-1", ThemeMode::Auto))
            .unwrap();
        assert!(resolver.resolve_active().is_none());

        selection
            .save(&ActiveSelection::new(PaletteOrigin::Builtin, "no-such", ThemeMode::Auto))
            .unwrap();
        assert!(resolver.resolve_active().is_none());
    }

    #[test]
    fn test_builtin_id_not_found_as_custom() {
        let (_, resolver, _, _) = setup();
        let selection = ActiveSelection::new(PaletteOrigin::Custom, DEFAULT_PALETTE_ID, ThemeMode::Auto);
        assert!(resolver.resolve(&selection).is_none());
    }

    #[test]
    fn test_resolve_after_removing_active_custom() {
        let (_, resolver, palettes, selection) = setup();
        let input: ColorInput = [("text".to_string(), "#fff".to_string())].into();
        let created = palettes.create("X", &input, ThemeMode::Dark).unwrap();
        selection
            .save(&ActiveSelection::new(PaletteOrigin::Custom, &created.id, ThemeMode::Dark))
            .unwrap();

        palettes.remove(&created.id).unwrap();

        let resolved = resolver.resolve_active().unwrap();
        assert_eq!(resolved.palette.id, DEFAULT_PALETTE_ID);
        assert_eq!(resolved.palette.origin, PaletteOrigin::Builtin);
        assert_eq!(resolved.mode, ThemeMode::Auto);
    }

    #[test]
    fn test_corrupt_selection_falls_back_to_default() {
        let (storage, resolver, _, _) = setup();
        storage
            .set(ACTIVE_SELECTION_KEY, serde_json::json!("garbage"))
            .unwrap();
        assert_eq!(resolver.resolve_active().unwrap().palette.id, DEFAULT_PALETTE_ID);
    }

    #[test]
    fn test_current_info() {
        let (_, resolver, _, selection) = setup();
        let info = resolver.current_info();
        assert_eq!(info.name, "Default Dark");
        assert!(info.colors.is_some());

        selection
            .save(&ActiveSelection::new(PaletteOrigin::Custom, "custom-gone-1", ThemeMode::Light))
            .unwrap();
        let info = resolver.current_info();
        assert_eq!(info.name, "Unknown");
        assert!(info.colors.is_none());
        assert_eq!(info.mode, ThemeMode::Light);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "custom");
        assert_eq!(json["colors"], serde_json::json!({}));
    }

    /// Store whose reads of one key always fail.
    struct FailingStore {
        inner: MemoryStore,
        broken_key: &'static str,
    }

    impl OptionStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
            if key == self.broken_key {
                return Err(StorageError::Io {
                    path: "options.json".into(),
                    source: std::io::Error::other("disk unavailable"),
                });
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_unreadable_selection_resolves_to_default() {
        let storage = Arc::new(FailingStore {
            inner: MemoryStore::new(),
            broken_key: ACTIVE_SELECTION_KEY,
        });
        let resolver = ThemeResolver::new(storage, Arc::new(PaletteCatalog::builtin()));

        let resolved = resolver.resolve_active().unwrap();
        assert_eq!(resolved.palette.id, DEFAULT_PALETTE_ID);
        assert_eq!(resolved.mode, ThemeMode::Auto);
    }

    #[test]
    fn test_unreadable_custom_palettes_resolve_to_none() {
        let storage = Arc::new(FailingStore {
            inner: MemoryStore::new(),
            broken_key: CUSTOM_PALETTES_KEY,
        });
        SelectionStore::new(storage.clone())
            .save(&ActiveSelection::new(PaletteOrigin::Custom, "custom-mine-1", ThemeMode::Dark))
            .unwrap();
        let resolver = ThemeResolver::new(storage, Arc::new(PaletteCatalog::builtin()));

        assert!(resolver.resolve_active().is_none());
        let info = resolver.current_info();
        assert_eq!(info.name, "Unknown");
        assert!(info.colors.is_none());
    }
}
