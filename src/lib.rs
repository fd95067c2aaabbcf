//! Remittance backend.
//!
//! A small REST API in front of a wallet: balance lookup, sending transfers,
//! transfer history and network status. Every transfer attempt that passes
//! validation is recorded in an in-memory ledger, whatever its outcome.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Wallet**: IOTA SDK wallet account behind the [`client::LedgerClient`] trait
//! - **Ledger**: process-local [`services::transaction_ledger::InMemoryLedger`]
//! - **Format**: JSON requests/responses

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/wallet-info", get(handlers::wallet::wallet_info))
        .route("/send", post(handlers::transfers::send_transaction))
        .route("/history", get(handlers::transfers::get_history))
        .route("/network-info", get(handlers::network::network_info))
        .layer(
            ServiceBuilder::new()
                // Request spans for observability
                .layer(TraceLayer::new_for_http())
                // Any origin may call the API
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
