//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::Config;
use crate::directory::Directory;
use crate::error::Result;
use super::build_router;

/// HTTP server for the directory
pub struct Server {
    config: Config,
    directory: Directory,
    shutdown: Arc<Notify>,
}

impl Server {
    /// Create a new server with the given config and directory
    pub fn new(config: Config, directory: Directory) -> Self {
        Self {
            config,
            directory,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Serve until Ctrl+C or [`Server::shutdown`]
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(listener, build_router(self.directory.clone()))
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("received Ctrl+C, initiating shutdown");
                    }
                    _ = shutdown.notified() => {
                        tracing::info!("shutdown requested");
                    }
                }
            })
            .await?;

        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Handle that can stop the server from another task
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }
}
