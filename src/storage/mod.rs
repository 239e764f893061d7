//! Key-value option storage.
//!
//! The theme state lives in two JSON values (the active selection and the
//! custom palette mapping). Services never touch the backing medium directly;
//! they receive an [`OptionStore`] so tests can substitute [`MemoryStore`].

pub mod file;
pub mod memory;

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by an option store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Failed to access option store at {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The backing data could not be encoded or decoded.
    #[error("Option store contains invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence collaborator: atomic per call, not transactional across calls.
pub trait OptionStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}
