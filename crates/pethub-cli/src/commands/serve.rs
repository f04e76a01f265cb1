//! Serve command - start the Pethub HTTP server
//!
//! Wires the in-memory stores into the application context and serves the
//! REST API until ctrl-c.

use anyhow::{Context, Result};
use pethub_api::{ApiState, HttpServer};
use pethub_application::{AppContext, CatalogRepositoryRef, CounterStoreRef};
use pethub_config::{Config, ConfigError};
use pethub_logging::{info, warn, LogConfig};
use pethub_storage::{MemoryCatalogStore, MemoryCounterStore};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

pub async fn run(
    config_path: &str,
    host: Option<String>,
    port: Option<u16>,
    debug: bool,
) -> Result<()> {
    // Missing config is fine for a demo service; anything else is fatal.
    // Config is loaded before logging so the configured level applies.
    let (mut config, config_missing) = match pethub_config::load_config(Path::new(config_path)) {
        Ok(config) => (config, false),
        Err(ConfigError::NotFound(_)) => (Config::default(), true),
        Err(e) => return Err(e).context("Failed to load config"),
    };

    // Logging before any other side effects
    pethub_logging::init(
        LogConfig::cli(debug)
            .default_level(config.logging.level.clone())
            .show_target(config.logging.show_target),
    );

    if config_missing {
        warn!(
            "Config file {} not found, using defaults (run 'pethub init' to create one)",
            config_path
        );
    }

    // CLI flags override the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr: SocketAddr = config
        .server
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_addr()))?;

    info!(
        "Pethub v{} starting on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    // State lives for the process lifetime: constructed here once, handed to
    // handlers by reference
    let catalog: CatalogRepositoryRef = Arc::new(MemoryCatalogStore::new());
    let counter: CounterStoreRef = Arc::new(MemoryCounterStore::new());
    let context = AppContext::new(catalog, counter, &config.api);
    let state = Arc::new(ApiState::new(context));

    // Bridge ctrl-c into the server's shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received ctrl-c, shutting down");
            let _ = shutdown_tx.send(true);
        }
    });

    let server = HttpServer::new(addr, state);
    let handle = server.start_with_shutdown(shutdown_rx).await?;

    handle.await.context("HTTP server task failed")?;
    info!("Shutdown complete");

    Ok(())
}
