//! SodaDB Server Binary
//!
//! Starts the HTTP server for SodaDB.

use std::sync::Arc;

use clap::Parser;
use sodadb::network::Server;
use sodadb::{Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// SodaDB Server
#[derive(Parser, Debug)]
#[command(name = "sodadb-server")]
#[command(about = "Toy in-memory JSON-over-HTTP database")]
#[command(version)]
struct Args {
    /// The name of the network interface
    #[arg(short, long)]
    network_interface: Option<String>,

    /// The listening IP address or the host name
    #[arg(short, long)]
    ipaddr_hostname: Option<String>,

    /// The name of the company running sodaDB
    #[arg(short, long, default_value = "Kube-Cola")]
    company: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sodadb=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("SodaDB Server v{}", sodadb::VERSION);

    // Build config from args
    let mut builder = Config::builder().company(&args.company);
    if let Some(name) = &args.network_interface {
        builder = builder.network_interface(name);
    }
    if let Some(host) = &args.ipaddr_hostname {
        builder = builder.ipaddr_hostname(host);
    }
    let config = builder.build();

    // Fail before binding anything if there is nothing to route for
    if let Err(e) = config.resolve_host() {
        tracing::error!(error = %e, "sodaDB failed to resolve its listening host.");
        std::process::exit(1);
    }

    let store = Arc::new(RecordStore::new());

    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
