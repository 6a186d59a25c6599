//! HTTP Server
//!
//! Resolves the routed host, binds the listener and serves the router.

use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::store::RecordStore;

/// HTTP server for SodaDB
pub struct Server {
    config: Config,
    store: Arc<RecordStore>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<RecordStore>) -> Self {
        Self { config, store }
    }

    /// Bind the configured port on all addresses and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.config.listen_port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on {}", addr);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes
    ///
    /// Fails before accepting anything if the routed host cannot be resolved.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let host = self.config.resolve_host()?;
        let app = http::router(self.store, &host);

        tracing::info!(
            company = %self.config.company,
            ip = %host,
            "sodadb is serving requests."
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
