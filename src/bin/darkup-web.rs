//! Darkup Web Server Binary
//!
//! Serves the theme API and the generated stylesheet.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured host, port and data file
//! darkup-web
//!
//! # Override port and data file
//! darkup-web --port 8080 --data-file ./options.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use darkup::catalog::PaletteCatalog;
use darkup::config::Config;
use darkup::storage::FileStore;
use darkup::web;

/// Darkup Web Server - REST API for theme preferences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to server.port from the config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to server.host from the config)
    #[arg(long)]
    host: Option<String>,

    /// Option store JSON file (defaults to storage.data_file from the config)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let data_file = match args.data_file {
        Some(path) => path,
        None => config.data_file_path()?,
    };
    info!("Option store: {}", data_file.display());

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context(format!("Invalid bind address {host}:{port}"))?;

    web::run_server(
        Arc::new(FileStore::new(data_file)),
        Arc::new(PaletteCatalog::builtin()),
        addr,
    )
    .await
}
