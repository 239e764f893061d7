//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::{DateTime, TimeZone, Utc};
use darkup::catalog::PaletteCatalog;
use darkup::services::{ColorInput, PaletteStore};
use darkup::storage::{FileStore, MemoryStore, OptionStore};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Fixed clock: 2025-01-01T00:00:00Z (unix 1735689600).
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Builds color input from `(role, value)` pairs.
pub fn colors(pairs: &[(&str, &str)]) -> ColorInput {
    pairs
        .iter()
        .map(|(role, value)| ((*role).to_string(), (*value).to_string()))
        .collect()
}

/// In-memory store plus the built-in catalog.
pub fn memory_context() -> (Arc<MemoryStore>, Arc<PaletteCatalog>) {
    (
        Arc::new(MemoryStore::new()),
        Arc::new(PaletteCatalog::builtin()),
    )
}

/// Palette store with the fixed clock.
pub fn palette_store(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> PaletteStore {
    PaletteStore::new(storage, catalog).with_clock(fixed_clock)
}

/// File store inside a fresh temp directory.
pub fn temp_file_store() -> (Arc<FileStore>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(FileStore::new(temp_dir.path().join("options.json")));
    (store, temp_dir)
}

/// Writes a raw options document (key -> value) into `dir/options.json`.
pub fn write_options_file(dir: &Path, options: &Value) -> PathBuf {
    let path = dir.join("options.json");
    fs::write(&path, serde_json::to_string_pretty(options).unwrap())
        .expect("Failed to write options file");
    path
}

/// Reads `dir/options.json` back as JSON.
pub fn read_options_file(dir: &Path) -> Value {
    let content = fs::read_to_string(dir.join("options.json")).expect("Failed to read options file");
    serde_json::from_str(&content).expect("Options file is not JSON")
}
