//! Active selection commands: `select` and `current`.

use crate::cli::common::{print_json, CliResult, ThemeContext};
use crate::handlers::{SelectionRequest, ThemeRequests};
use crate::services::ThemeResolver;
use clap::Args;

/// Make a palette the active theme
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Palette id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Palette origin (default or custom)
    #[arg(long = "type", value_name = "TYPE", default_value = "default")]
    pub origin: String,

    /// Display mode (auto, dark, or light)
    #[arg(long, value_name = "MODE", default_value = "auto")]
    pub mode: String,
}

impl SelectArgs {
    /// Execute select command
    pub fn execute(&self) -> CliResult<()> {
        let context = ThemeContext::open()?;
        let requests = ThemeRequests::new(context.storage, context.catalog);

        let envelope = requests.save_selection(&SelectionRequest {
            origin: self.origin.clone(),
            id: self.id.clone(),
            mode: self.mode.clone(),
        })?;

        println!("{}", envelope.message);
        Ok(())
    }
}

/// Show the active theme
#[derive(Debug, Clone, Args)]
pub struct CurrentArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CurrentArgs {
    /// Execute current command
    pub fn execute(&self) -> CliResult<()> {
        let context = ThemeContext::open()?;
        let info = ThemeResolver::new(context.storage, context.catalog).current_info();

        if self.json {
            return print_json(&info);
        }

        println!("Palette: {} ({})", info.name, info.id);
        println!("Type:    {}", info.origin);
        println!("Mode:    {}", info.mode);
        if info.colors.is_none() {
            println!("Note:    the selected palette no longer exists; no theme is applied");
        }
        Ok(())
    }
}
