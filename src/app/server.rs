//! Server Lifecycle
//!
//! Loads the store once, publishes it to the router and serves HTTP until a
//! shutdown signal arrives.

use super::config::Config;
use crate::api::router::build_router;
use crate::api::types::SearchSettings;
use crate::indices::ReaderIndices;
use anyhow::{Context, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the configured input file. Runs to completion before anything is served.
    pub fn load_indices(&self) -> Result<ReaderIndices> {
        let path = &self.config.input_file_name;
        let indices = ReaderIndices::from_path(path)
            .with_context(|| format!("failed to load indices from {}", path.display()))?;
        tracing::info!("Loaded {} indices from {}", indices.len(), path.display());
        Ok(indices)
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            timeout: self.config.search_timeout(),
        }
    }

    /// Loads the store, binds the configured address and serves until Ctrl+C / SIGTERM.
    pub async fn run(self) -> Result<()> {
        let indices = self.load_indices()?;

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        self.serve(listener, indices, shutdown_signal()).await
    }

    /// Serves an already loaded store on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, indices: ReaderIndices, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(Arc::new(indices), self.search_settings());

        tracing::info!("HTTP server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
