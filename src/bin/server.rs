//! orgchart Server Binary
//!
//! Starts the HTTP server for the employee directory.

use std::path::PathBuf;

use clap::Parser;
use orgchart::config::{SeedSource, WalSyncStrategy};
use orgchart::http::Server;
use orgchart::{Config, Directory};
use tracing_subscriber::{fmt, EnvFilter};

/// orgchart Server
#[derive(Parser, Debug)]
#[command(name = "orgchart-server")]
#[command(about = "Employee directory with reporting structure and compensation views")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Journal directory; documents are kept in memory only when omitted
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Fsync the journal after this many writes (1 = every write)
    #[arg(short, long, default_value = "100")]
    sync_every: usize,

    /// JSON file of employees to seed an empty store with
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<PathBuf>,

    /// Start with an empty store instead of the bundled employees
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,orgchart=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("orgchart Server v{}", orgchart::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let mut builder = Config::builder().listen_addr(&args.listen);

    builder = match &args.data_dir {
        Some(dir) => {
            tracing::info!("Data directory: {}", dir.display());
            builder.data_dir(dir)
        }
        None => {
            tracing::info!("No data directory, documents are kept in memory");
            builder.in_memory()
        }
    };

    builder = builder.wal_sync_strategy(match args.sync_every {
        0 | 1 => WalSyncStrategy::EveryWrite,
        count => WalSyncStrategy::EveryNEntries { count },
    });

    builder = builder.seed(match (args.no_seed, args.seed) {
        (true, _) => SeedSource::None,
        (false, Some(path)) => SeedSource::File(path),
        (false, None) => SeedSource::Bundled,
    });

    let config = builder.build();

    // Open stores and seed
    let directory = match Directory::open(&config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to open directory: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Directory initialized with {} employees",
        directory.employee_count()
    );

    // Start server
    let server = Server::new(config, directory);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
