//! Page render output: the theme style element and the client bootstrap snapshot.

use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::branding::{LOCAL_MODE_KEY, LOCAL_THEME_KEY, STYLE_ELEMENT_ID};
use crate::catalog::PaletteCatalog;
use crate::css::CssEmitter;
use crate::models::Palette;
use crate::services::{CurrentThemeInfo, PaletteStore, ThemeResolver};
use crate::storage::OptionStore;

/// Local storage keys the client widget uses as its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageKeys {
    /// Key holding the locally chosen mode
    pub mode: String,
    /// Key holding the locally chosen palette id
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            mode: LOCAL_MODE_KEY.to_string(),
            theme: LOCAL_THEME_KEY.to_string(),
        }
    }
}

/// Everything the client-side widget needs at page load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    /// Built-in palettes in catalog order
    pub builtin_palettes: Vec<Palette>,
    /// Custom palettes ordered by id
    pub custom_palettes: Vec<Palette>,
    /// The active selection with its palette name and colors
    pub current_selection: CurrentThemeInfo,
    /// Widget fallback keys
    pub storage_keys: StorageKeys,
}

/// Produces per-request render output from the latest persisted state.
#[derive(Clone)]
pub struct ThemeRenderer {
    catalog: Arc<PaletteCatalog>,
    palettes: PaletteStore,
    resolver: ThemeResolver,
    emitter: CssEmitter,
}

impl ThemeRenderer {
    /// Creates a renderer over `storage` and `catalog`.
    pub fn new(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Self {
        Self {
            palettes: PaletteStore::new(storage.clone(), catalog.clone()),
            resolver: ThemeResolver::new(storage, catalog.clone()),
            emitter: CssEmitter::new(catalog.clone()),
            catalog,
        }
    }

    /// CSS for the active theme, or `None` when nothing resolves.
    pub fn stylesheet(&self) -> Option<String> {
        self.resolver
            .resolve_active()
            .map(|resolved| self.emitter.emit(&resolved))
    }

    /// The stylesheet wrapped in its `<style>` element, or an empty string.
    pub fn style_element(&self) -> String {
        match self.stylesheet() {
            Some(css) => format!("<style id=\"{STYLE_ELEMENT_ID}\">\n{css}\n</style>\n"),
            None => String::new(),
        }
    }

    /// Builds the client bootstrap snapshot.
    ///
    /// Unreadable custom palette data is logged and reported as empty.
    pub fn snapshot(&self) -> ClientSnapshot {
        let custom_palettes = self.palettes.list().unwrap_or_else(|e| {
            warn!("Failed to read custom palettes for snapshot: {e}");
            Vec::new()
        });

        ClientSnapshot {
            builtin_palettes: self.catalog.all().to_vec(),
            custom_palettes,
            current_selection: self.resolver.current_info(),
            storage_keys: StorageKeys::default(),
        }
    }
}
