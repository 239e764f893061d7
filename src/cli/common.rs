//! Shared CLI plumbing: exit codes, errors, and store access.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::PaletteCatalog;
use crate::config::Config;
use crate::error::PaletteError;
use crate::storage::{FileStore, OptionStore, StorageError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
    /// Requested palette does not exist
    NotFound = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed command with the code the process should exit with.
#[derive(Debug)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code
    pub exit_code: ExitCode,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }

    /// Requested palette does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::NotFound,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PaletteError> for CliError {
    fn from(error: PaletteError) -> Self {
        match error {
            PaletteError::Validation(message) => Self::validation(message),
            e @ PaletteError::NotFound { .. } => Self::not_found(e.to_string()),
            PaletteError::Storage(e) => Self::from(e),
        }
    }
}

impl From<StorageError> for CliError {
    fn from(error: StorageError) -> Self {
        Self::io(format!("Storage error: {error}"))
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Storage and catalog opened from the user's configuration.
pub struct ThemeContext {
    /// Option store backed by the configured data file
    pub storage: Arc<dyn OptionStore>,
    /// Built-in palettes
    pub catalog: Arc<PaletteCatalog>,
}

impl ThemeContext {
    /// Loads the configuration and opens its data file.
    pub fn open() -> CliResult<Self> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let data_file = config
            .data_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve data file: {e}")))?;

        Ok(Self {
            storage: Arc::new(FileStore::new(data_file)),
            catalog: Arc::new(PaletteCatalog::builtin()),
        })
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
