//! Active selection persistence.

use std::sync::Arc;
use tracing::{info, warn};

use crate::branding::ACTIVE_SELECTION_KEY;
use crate::models::ActiveSelection;
use crate::storage::{OptionStore, StorageError};

/// Reads and writes the single active selection record.
#[derive(Clone)]
pub struct SelectionStore {
    storage: Arc<dyn OptionStore>,
}

impl SelectionStore {
    /// Creates a selection store over `storage`.
    pub fn new(storage: Arc<dyn OptionStore>) -> Self {
        Self { storage }
    }

    /// Loads the persisted selection.
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored value is not a
    /// valid selection record (the latter is logged).
    pub fn load(&self) -> Result<Option<ActiveSelection>, StorageError> {
        let Some(value) = self.storage.get(ACTIVE_SELECTION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(selection) => Ok(Some(selection)),
            Err(e) => {
                warn!("Ignoring malformed active selection record: {e}");
                Ok(None)
            }
        }
    }

    /// The selection in effect, falling back to the default when nothing
    /// usable is stored or storage cannot be read.
    pub fn current(&self) -> ActiveSelection {
        match self.load() {
            Ok(Some(selection)) => selection,
            Ok(None) => ActiveSelection::default(),
            Err(e) => {
                warn!("Failed to read active selection, using default: {e}");
                ActiveSelection::default()
            }
        }
    }

    /// Persists `selection` as the active one.
    pub fn save(&self, selection: &ActiveSelection) -> Result<(), StorageError> {
        self.storage
            .set(ACTIVE_SELECTION_KEY, serde_json::to_value(selection)?)?;
        info!(
            "Active selection set to {} '{}' ({})",
            selection.origin, selection.id, selection.mode
        );
        Ok(())
    }

    /// Resets the selection to `(builtin, default-dark, auto)`.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.save(&ActiveSelection::default())
    }

    /// Writes the default selection if none is stored yet.
    ///
    /// Returns true if the default was written.
    pub fn ensure_default(&self) -> Result<bool, StorageError> {
        if self.storage.get(ACTIVE_SELECTION_KEY)?.is_some() {
            return Ok(false);
        }
        self.reset()?;
        Ok(true)
    }
}
