mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemstore_core::storage::ItemStore;

use crate::{
    app::create_app,
    config::Config,
    state::AppState,
    storage::{DynamoDbStore, InMemoryStore},
};

/// Storage backend selection.
#[derive(ValueEnum, Clone, Debug)]
enum Backend {
    /// AWS DynamoDB via the SDK default credential chain
    Dynamodb,
    /// In-memory map, for local development without AWS access
    Memory,
}

/// ItemStore - accept JSON items over HTTP and write them to DynamoDB
#[derive(Parser, Debug)]
#[command(name = "itemstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = "dynamodb", env = "STORAGE_BACKEND")]
    backend: Backend,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Build the store once; it is shared read-only across all requests.
    let store: Arc<dyn ItemStore> = match cli.backend {
        Backend::Dynamodb => {
            let store = DynamoDbStore::from_config(&config).await;
            tracing::info!(
                table = store.table_name(),
                region = %config.region,
                "Using DynamoDB backend"
            );
            Arc::new(store)
        }
        Backend::Memory => {
            tracing::info!("Using in-memory backend");
            Arc::new(InMemoryStore::new())
        }
    };

    // Build the application router
    let app = create_app(AppState::new(store));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
