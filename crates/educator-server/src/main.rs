//! # educator-server
//!
//! Educator backend binary — loads settings, opens the records database,
//! and starts the HTTP server.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use educator_llm::{CompletionProxy, ProxyConfig};
use educator_records::{ConnectionConfig, SqliteRecordStore, new_file};
use educator_server::{EducatorServer, ServerConfig};
use educator_settings::load_settings;

/// Educator backend server.
#[derive(Parser, Debug)]
#[command(name = "educator-server", about = "Student records + chat proxy backend")]
struct Cli {
    /// Host to bind (overrides settings).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides settings).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` records database (overrides settings).
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings().context("failed to load settings")?;
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(db_path) = cli.db_path {
        settings.server.database_path = db_path.display().to_string();
    }

    let api_token = settings
        .provider
        .api_token
        .clone()
        .context("no provider credential configured (set HF_TOKEN)")?;

    ensure_parent_dir(&settings.server.database_path)?;
    let pool = new_file(&settings.server.database_path, &ConnectionConfig::default())
        .with_context(|| {
            format!(
                "failed to open database at {}",
                settings.server.database_path
            )
        })?;
    let conn = pool.get()?;
    educator_records::sqlite::run_migrations(&conn)?;
    drop(conn);
    let store = Arc::new(SqliteRecordStore::new(pool));

    let proxy = CompletionProxy::new(ProxyConfig {
        base_url: settings.provider.base_url.clone(),
        api_token,
        default_model: settings.provider.default_model.clone(),
        timeout: Duration::from_secs(settings.provider.timeout_secs),
    });

    let config = ServerConfig {
        host: settings.server.host.clone(),
        port: settings.server.port,
    };
    tracing::info!(host = %config.host, port = config.port, "starting educator backend");
    EducatorServer::new(config, store, proxy).serve().await?;
    Ok(())
}
