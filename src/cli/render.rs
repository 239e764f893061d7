//! Render output commands: `css` and `snapshot`.

use crate::cli::common::{print_json, CliResult, ThemeContext};
use crate::render::ThemeRenderer;
use clap::Args;
use tracing::debug;

/// Print the stylesheet for the active theme
#[derive(Debug, Clone, Args)]
pub struct CssArgs {
    /// Wrap the CSS in its <style> element
    #[arg(long)]
    pub style_tag: bool,
}

impl CssArgs {
    /// Execute css command
    pub fn execute(&self) -> CliResult<()> {
        let context = ThemeContext::open()?;
        let renderer = ThemeRenderer::new(context.storage, context.catalog);

        let output = if self.style_tag {
            renderer.style_element()
        } else {
            renderer.stylesheet().unwrap_or_default()
        };

        if output.is_empty() {
            debug!("No active theme, nothing to print");
        }
        print!("{output}");
        Ok(())
    }
}

/// Print the client bootstrap snapshot as JSON
#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs;

impl SnapshotArgs {
    /// Execute snapshot command
    pub fn execute(&self) -> CliResult<()> {
        let context = ThemeContext::open()?;
        print_json(&ThemeRenderer::new(context.storage, context.catalog).snapshot())
    }
}
