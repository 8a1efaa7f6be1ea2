//! Sinai RPC Server - JSON-RPC backend for the Sinai Showcase site.
//!
//! This binary serves the site's data documents and exposes the sinai-core
//! search and navigation operations over JSON-RPC 2.0 to a thin browser
//! front end.

mod handlers;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use sinai_core::config::AppConfig;
use sinai_core::SiteApi;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "sinai-rpc")]
#[command(about = "JSON-RPC server for the Sinai Showcase site")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Site root directory containing `data/` (defaults to the current directory)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Override the base URL documents are fetched from
    /// (defaults to this server)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting {} RPC Server", AppConfig::APP_NAME);

    let site_root = match args.site_root {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    info!("Site root: {}", site_root.display());

    // Bind first so the loader can fetch documents from this very server.
    let (listener, addr) = server::bind(&args.host, args.port).await?;
    let base_url = args
        .base_url
        .unwrap_or_else(|| format!("http://{}", addr));

    let api = SiteApi::builder()
        .base_url(base_url)
        .load_on_build(false)
        .build()
        .await?;
    let state = Arc::new(server::AppState { api, site_root });
    server::serve(listener, Arc::clone(&state));

    let entries = state.api.initialize().await;
    info!("Indexed {} entries", entries);

    // Print port for the front end to read (intentional stdout for IPC)
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
