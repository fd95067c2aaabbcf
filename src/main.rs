//! Remittance Backend - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables (missing `MNEMONIC` is fatal)
//! 2. Build the in-memory transaction ledger and an empty wallet slot
//! 3. Start listening on the configured port
//! 4. Open and sync the wallet account in the background
//! 5. Serve until Ctrl-C or SIGTERM

use std::sync::Arc;

use remittance_backend::{
    AppState, build_router,
    config::Config,
    services::{
        transaction_ledger::InMemoryLedger,
        wallet::{WalletHandle, bootstrap},
    },
    state::NetworkSettings,
};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(network = %config.network_name, node = %config.node_url, "Configuration loaded");

    let wallet = WalletHandle::pending();
    let state = AppState::new(
        wallet.clone(),
        Arc::new(InMemoryLedger::new()),
        NetworkSettings::from(&config),
        config.ledger_timeout(),
    );
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("IOTA Remittance API running on {}", addr);

    // Requests needing the wallet get a 500 until this finishes
    tokio::spawn(async move {
        match bootstrap(&config, &wallet).await {
            Ok(()) => tracing::info!("Server ready to handle requests"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize wallet");
                std::process::exit(1);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutting down server...");
}
