//! # Portfolio API Server CLI
//!
//! Command-line interface for the portfolio backend.
//!
//! This binary wires configuration from the environment and CLI flags into
//! the HTTP server: a file-backed visitor counter, an optional Resend email
//! sender for contact notifications, and the static project catalog.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal::ctrl_c;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_api_rs::config::Config;
use portfolio_api_rs::delivery::ResendSender;
use portfolio_api_rs::http::{router_with_origin, AppState};
use portfolio_api_rs::projects::Catalog;
use portfolio_api_rs::store::FileCounterStore;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments; flags override the environment
    let cli = Cli::parse();
    let config = Config::from_env();

    // Open (or initialize) the counter file
    let counter_path = cli.counter_file.unwrap_or_else(|| config.counter_file.clone());
    let store = Arc::new(FileCounterStore::open(&counter_path).map_err(io::Error::other)?);
    tracing::info!("visitor counter file: {}", counter_path.display());

    // Project catalog (can work without a file - built-in entries)
    let catalog = if let Some(path) = &cli.projects {
        Catalog::load_from_path(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
    } else {
        Catalog::default()
    };

    let mut builder = AppState::builder()
        .with_counter(store)
        .with_catalog(catalog)
        .with_contact_from(config.contact_from.clone())
        .with_recipients(config.contact_to.clone());

    if let Some(api_key) = &config.resend_api_key {
        let timeout = cli.delivery_timeout.unwrap_or(config.delivery_timeout);
        builder =
            builder.with_sender(Arc::new(ResendSender::with_timeout(api_key.clone(), timeout)));
    } else {
        tracing::warn!("RESEND_API_KEY not set, contact notifications will be skipped");
    }

    let state = builder.build()?;

    let client_url = cli.client_url.or(config.client_url);
    let app = router_with_origin(state, client_url.as_deref());

    let addr: SocketAddr = match cli.listen {
        Some(listen) => listen.parse().map_err(io::Error::other)?,
        None => SocketAddr::from(([0, 0, 0, 0], config.port)),
    };
    tracing::info!("starting portfolio-api on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
