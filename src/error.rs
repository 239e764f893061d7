//! Error types for palette and selection operations.

use thiserror::Error;

use crate::models::PaletteOrigin;
use crate::storage::StorageError;

/// Failure of a palette or selection mutation.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The request was rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    /// The operation targets a palette that does not exist.
    #[error("Palette '{id}' ({origin}) not found")]
    NotFound {
        /// Origin that was searched
        origin: PaletteOrigin,
        /// Requested id
        id: String,
    },

    /// The option store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PaletteError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shorthand for a missing custom palette.
    pub fn custom_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            origin: PaletteOrigin::Custom,
            id: id.into(),
        }
    }
}

/// Result alias for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
