//! quarry-server binary.
//!
//! Reads `quarry.toml` (or the path specified with `--config`), builds an
//! in-memory tracker store, and serves the JSON API over HTTP under `/api`.
//! The store lives for the process lifetime; nothing is persisted.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use quarry_store_memory::MemoryStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `quarry.toml` layered
/// under `QUARRY_*` environment variables. Every field has a default, so the
/// server starts with no config file at all.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host: String,
  #[serde(default = "default_port")]
  port: u16,
  /// Populate the store with sample listings and templates at startup.
  #[serde(default = "default_seed")]
  seed_sample_data: bool,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  5280
}

fn default_seed() -> bool {
  true
}

// ─── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Quarry job-search tracker server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "quarry.toml")]
  config: PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("QUARRY"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Build the store.
  let store = if server_cfg.seed_sample_data {
    tracing::info!("Seeding sample job listings and templates");
    MemoryStore::with_sample_data()
  } else {
    MemoryStore::new()
  };

  let app = axum::Router::new()
    .nest("/api", quarry_api::api_router(Arc::new(store)))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
