//! CLI command handlers for Darkup.
//!
//! Headless, scriptable access to palettes, the active selection and the
//! generated stylesheet. Every command reads and writes the option store
//! named by the configuration.

pub mod common;
pub mod config;
pub mod init;
pub mod palette;
pub mod render;
pub mod select;

// Re-export types used by main.rs
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use init::InitArgs;
pub use palette::PaletteArgs;
pub use render::{CssArgs, SnapshotArgs};
pub use select::{CurrentArgs, SelectArgs};
