//! Palette management commands.
//!
//! Lists, shows, creates, updates and deletes palettes. Built-in palettes are
//! read-only; create/update/delete act on custom palettes only.

use crate::cli::common::{print_json, CliError, CliResult, ThemeContext};
use crate::handlers::parse_mode;
use crate::models::{Palette, PaletteOrigin};
use crate::services::{ColorInput, PaletteStore};
use clap::{Args, Subcommand, ValueEnum};

/// Manage palettes
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// List built-in and custom palettes
    List(ListPalettesArgs),
    /// Show one palette with its colors
    Show(ShowPaletteArgs),
    /// Create a custom palette
    Create(CreatePaletteArgs),
    /// Update a custom palette
    Update(UpdatePaletteArgs),
    /// Delete a custom palette
    Delete(DeletePaletteArgs),
}

/// Which palettes to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OriginFilter {
    /// Built-in and custom
    All,
    /// Built-in only
    Default,
    /// Custom only
    Custom,
}

/// List palettes
#[derive(Debug, Clone, Args)]
pub struct ListPalettesArgs {
    /// Restrict to one origin
    #[arg(long, value_enum, default_value = "all")]
    pub origin: OriginFilter,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show a palette
#[derive(Debug, Clone, Args)]
pub struct ShowPaletteArgs {
    /// Palette id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Look up a custom palette instead of a built-in one
    #[arg(long)]
    pub custom: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Create a custom palette
#[derive(Debug, Clone, Args)]
pub struct CreatePaletteArgs {
    /// Display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Role color as ROLE=HEX (repeatable), e.g. background=#101010
    #[arg(long = "color", value_name = "ROLE=HEX", value_parser = parse_color_pair)]
    pub colors: Vec<(String, String)>,

    /// Intrinsic mode (auto, dark, or light)
    #[arg(long, value_name = "MODE", default_value = "dark")]
    pub mode: String,

    /// Output the created palette as JSON
    #[arg(long)]
    pub json: bool,
}

/// Update a custom palette
#[derive(Debug, Clone, Args)]
pub struct UpdatePaletteArgs {
    /// Custom palette id
    #[arg(value_name = "ID")]
    pub id: String,

    /// New display name (keeps the current one if omitted)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Role color as ROLE=HEX (repeatable), applied over the current colors
    #[arg(long = "color", value_name = "ROLE=HEX", value_parser = parse_color_pair)]
    pub colors: Vec<(String, String)>,

    /// New intrinsic mode (keeps the current one if omitted)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output the updated palette as JSON
    #[arg(long)]
    pub json: bool,
}

/// Delete a custom palette
#[derive(Debug, Clone, Args)]
pub struct DeletePaletteArgs {
    /// Custom palette id
    #[arg(value_name = "ID")]
    pub id: String,
}

fn parse_color_pair(raw: &str) -> Result<(String, String), String> {
    let (role, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected ROLE=HEX, got '{raw}'"))?;
    Ok((role.trim().to_string(), value.trim().to_string()))
}

impl PaletteArgs {
    /// Execute palette subcommand
    pub fn execute(&self) -> CliResult<()> {
        let context = ThemeContext::open()?;
        let store = PaletteStore::new(context.storage.clone(), context.catalog.clone());

        match &self.command {
            PaletteCommand::List(args) => args.execute(&context, &store),
            PaletteCommand::Show(args) => args.execute(&context, &store),
            PaletteCommand::Create(args) => args.execute(&store),
            PaletteCommand::Update(args) => args.execute(&store),
            PaletteCommand::Delete(args) => args.execute(&store),
        }
    }
}

impl ListPalettesArgs {
    fn execute(&self, context: &ThemeContext, store: &PaletteStore) -> CliResult<()> {
        let mut palettes: Vec<Palette> = Vec::new();
        if self.origin != OriginFilter::Custom {
            palettes.extend(context.catalog.all().iter().cloned());
        }
        if self.origin != OriginFilter::Default {
            palettes.extend(store.list()?);
        }

        if self.json {
            return print_json(&palettes);
        }

        if palettes.is_empty() {
            println!("No palettes found.");
            return Ok(());
        }
        for palette in &palettes {
            println!(
                "{:<32} {:<8} {:<6} {}",
                palette.id, palette.origin, palette.mode, palette.name
            );
        }
        Ok(())
    }
}

impl ShowPaletteArgs {
    fn execute(&self, context: &ThemeContext, store: &PaletteStore) -> CliResult<()> {
        let (origin, found) = if self.custom {
            (PaletteOrigin::Custom, store.get(&self.id)?)
        } else {
            (PaletteOrigin::Builtin, context.catalog.get(&self.id).cloned())
        };

        let palette = found.ok_or_else(|| {
            CliError::not_found(format!("Palette '{}' ({origin}) not found", self.id))
        })?;

        if self.json {
            return print_json(&palette);
        }
        print_palette(&palette);
        Ok(())
    }
}

impl CreatePaletteArgs {
    fn execute(&self, store: &PaletteStore) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;
        let colors: ColorInput = self.colors.iter().cloned().collect();
        let palette = store.create(&self.name, &colors, mode)?;

        if self.json {
            return print_json(&palette);
        }
        println!("Created custom palette '{}' ({})", palette.name, palette.id);
        Ok(())
    }
}

impl UpdatePaletteArgs {
    fn execute(&self, store: &PaletteStore) -> CliResult<()> {
        let current = store.get(&self.id)?.ok_or_else(|| {
            CliError::not_found(format!("Palette '{}' (custom) not found", self.id))
        })?;

        let name = self.name.clone().unwrap_or_else(|| current.name.clone());
        let mode = match &self.mode {
            Some(raw) => parse_mode(raw)?,
            None => current.mode,
        };
        let mut colors = current.colors.to_map();
        colors.extend(self.colors.iter().cloned());

        let palette = store.update(&self.id, &name, &colors, mode)?;

        if self.json {
            return print_json(&palette);
        }
        println!("Updated custom palette '{}' ({})", palette.name, palette.id);
        Ok(())
    }
}

impl DeletePaletteArgs {
    fn execute(&self, store: &PaletteStore) -> CliResult<()> {
        if !store.remove(&self.id)? {
            return Err(CliError::not_found(format!(
                "Palette '{}' (custom) not found",
                self.id
            )));
        }
        println!("Deleted custom palette {}", self.id);
        Ok(())
    }
}

fn print_palette(palette: &Palette) {
    println!("{} ({})", palette.name, palette.id);
    println!("  type: {}", palette.origin);
    println!("  mode: {}", palette.mode);
    if let Some(created) = palette.created_at {
        println!("  created: {}", created.to_rfc3339());
    }
    if let Some(updated) = palette.updated_at {
        println!("  updated: {}", updated.to_rfc3339());
    }
    println!("  colors:");
    for (role, color) in palette.colors.iter() {
        println!("    {:<15} {}", role.key(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_pair() {
        assert_eq!(
            parse_color_pair("background=#101010").unwrap(),
            ("background".to_string(), "#101010".to_string())
        );
        assert_eq!(
            parse_color_pair(" text = #fff ").unwrap(),
            ("text".to_string(), "#fff".to_string())
        );
        assert!(parse_color_pair("background").is_err());
    }
}
