//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Option store JSON file
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Web server bind address
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    storage: StorageOutput,
    server: ServerOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_file: String,
}

#[derive(Serialize, Debug)]
struct ServerOutput {
    host: String,
    port: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            println!("Config file: {}", output.config_file);
            println!();
            println!("[storage]");
            println!("  data_file: {}", output.storage.data_file);
            println!();
            println!("[server]");
            println!("  host: {}", output.server.host);
            println!("  port: {}", output.server.port);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.data_file.is_none() && self.host.is_none() && self.port.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-file, --host, or --port",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.data_file {
            config.storage.data_file = Some(path.clone());
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let data_file = config
            .data_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve data file: {e}")))?;

        Ok(Self {
            config_file: config_file.to_string_lossy().to_string(),
            storage: StorageOutput {
                data_file: data_file.to_string_lossy().to_string(),
            },
            server: ServerOutput {
                host: config.server.host.clone(),
                port: config.server.port,
            },
        })
    }
}
