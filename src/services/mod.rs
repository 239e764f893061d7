//! Service layer for theme state.
//!
//! Services wrap the injected [`OptionStore`] and the static catalog. They
//! are cheap to clone and hold no cached state.

pub mod palettes;
pub mod resolver;
pub mod selection;

use std::sync::Arc;
use tracing::info;

use crate::catalog::PaletteCatalog;
use crate::storage::{OptionStore, StorageError};

// Re-export commonly used types and functions
pub use palettes::{validate_colors, ColorInput, PaletteStore};
pub use resolver::{CurrentThemeInfo, ThemeResolver};
pub use selection::SelectionStore;

/// First-run activation: writes the default selection and an empty custom
/// palette mapping if they are missing. Existing values are left alone.
pub fn activate(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Result<(), StorageError> {
    let wrote_selection = SelectionStore::new(storage.clone()).ensure_default()?;
    let wrote_palettes = PaletteStore::new(storage, catalog).ensure_initialized()?;

    if wrote_selection || wrote_palettes {
        info!("Initialized theme options with defaults");
    }
    Ok(())
}
