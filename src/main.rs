//! Darkup - theme preference manager
//!
//! Command-line front end for managing color palettes, choosing the active
//! theme and printing the generated stylesheet.

use clap::{Parser, Subcommand};
use darkup::branding::APP_DISPLAY_NAME;
use darkup::cli::{
    CliResult, ConfigArgs, CssArgs, CurrentArgs, InitArgs, PaletteArgs, SelectArgs, SnapshotArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Darkup - theme preference manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write default configuration and theme options if missing
    Init(InitArgs),
    /// Manage palettes
    Palette(PaletteArgs),
    /// Make a palette the active theme
    Select(SelectArgs),
    /// Show the active theme
    Current(CurrentArgs),
    /// Print the stylesheet for the active theme
    Css(CssArgs),
    /// Print the client bootstrap snapshot as JSON
    Snapshot(SnapshotArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Init(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Select(args) => args.execute(),
            Self::Current(args) => args.execute(),
            Self::Css(args) => args.execute(),
            Self::Snapshot(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "darkup=debug" } else { "darkup=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("{APP_DISPLAY_NAME} error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
