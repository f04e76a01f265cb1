//! HTTP server lifecycle management

use super::routes::create_router;
use crate::state::ApiState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

/// HTTP server for the REST API
pub struct HttpServer {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(addr: SocketAddr, state: Arc<ApiState>) -> Self {
        Self { addr, state }
    }

    /// Start the HTTP server
    ///
    /// Returns a handle to the server task
    pub async fn start(self) -> anyhow::Result<JoinHandle<()>> {
        info!("Starting HTTP server on {}...", self.addr);

        let router = create_router(Arc::clone(&self.state));

        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind HTTP server: {}", e))?;

        info!("HTTP server listening on {}", self.addr);
        info!("   Pets:    http://{}/pets", self.addr);
        info!("   Counter: http://{}/hits", self.addr);
        info!("   Health:  http://{}/health", self.addr);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("HTTP server error: {}", e);
            }
        });

        Ok(handle)
    }

    /// Start the HTTP server with graceful shutdown
    ///
    /// Returns a handle to the server task that will shut down when the
    /// shutdown signal fires.
    pub async fn start_with_shutdown(
        self,
        shutdown_rx: tokio::sync::watch::Receiver<bool>,
    ) -> anyhow::Result<JoinHandle<()>> {
        info!("Starting HTTP server on {}...", self.addr);

        let router = create_router(Arc::clone(&self.state));

        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind HTTP server: {}", e))?;

        info!("HTTP server listening on {}", self.addr);
        info!("   Pets:    http://{}/pets", self.addr);
        info!("   Counter: http://{}/hits", self.addr);
        info!("   Health:  http://{}/health", self.addr);

        let handle = tokio::spawn(async move {
            let shutdown_signal = async {
                let mut rx = shutdown_rx;
                loop {
                    if *rx.borrow() {
                        break;
                    }
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
                info!("HTTP server received shutdown signal");
            };

            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal)
                .await
            {
                tracing::error!("HTTP server error: {}", e);
            }

            info!("HTTP server stopped");
        });

        Ok(handle)
    }
}
