//! First-run initialization.

use crate::cli::common::{CliError, CliResult, ThemeContext};
use crate::config::Config;
use crate::services::activate;
use clap::Args;

/// Write default configuration and theme options if missing
#[derive(Debug, Clone, Args)]
pub struct InitArgs {}

impl InitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let config_path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        if !config_path.exists() {
            Config::new()
                .save()
                .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;
            println!("Wrote default configuration to {}", config_path.display());
        }

        let context = ThemeContext::open()?;
        activate(context.storage, context.catalog)?;

        println!("Theme options initialized.");
        Ok(())
    }
}
