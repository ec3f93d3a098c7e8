//! ticket-desk - REST backend for teams, users, and tickets
//!
//! This is the main entry point for the ticket-desk server. It parses
//! command-line arguments, layers them over file/environment configuration,
//! seeds the data file when absent, and serves the API.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use ticket_desk::api::{self, AppState};
use ticket_desk::config::Config;
use ticket_desk::storage::FileStorage;
use tracing_subscriber::EnvFilter;

/// A small REST backend for teams, users, and tickets over a single JSON document
///
/// Every flag overrides the corresponding configuration key; unset flags
/// leave the file/environment/default layering in charge.
#[derive(Debug, Parser)]
#[command(
    name = "ticket-desk",
    version,
    about = "A small REST backend for teams, users, and tickets over a single JSON document"
)]
struct Cli {
    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(long)]
    port: Option<u16>,

    /// Path to the JSON document backing the store
    #[arg(long)]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    let storage = FileStorage::new(&config.data_file);
    storage
        .ensure_document()
        .context("failed to seed the data file")?;

    let addr = config.bind_addr();
    let app = api::router(AppState::new(storage));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, data_file = %config.data_file.display(), "ticket-desk listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ticket_desk=info,tower_http=info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
