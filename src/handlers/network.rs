//! Network information handler.
//!
//! - GET /network-info - node URL, health and latest milestone

use axum::{Json, extract::State};

use crate::{error::AppError, models::wallet::NetworkInfoResponse, state::AppState};

/// Report the ledger network the wallet is connected to.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "network": "shimmer-testnet",
///   "nodeUrl": "https://api.testnet.shimmer.network",
///   "health": true,
///   "latestMilestone": 4242
/// }
/// ```
///
/// If the node cannot be queried the response is still 200, with
/// `"health": false` and `"error": "Network unavailable"`.
///
/// Returns 500 only when the wallet is not initialized.
pub async fn network_info(
    State(state): State<AppState>,
) -> Result<Json<NetworkInfoResponse>, AppError> {
    let client = state.wallet.client()?;

    let (health, latest_milestone, error) = match client.network_status().await {
        Ok(status) => (status.healthy, status.latest_milestone, None),
        Err(e) => {
            tracing::error!(error = %e, "Error getting network info");
            (false, None, Some("Network unavailable".to_string()))
        }
    };

    Ok(Json(NetworkInfoResponse {
        network: state.network.name.clone(),
        node_url: state.network.node_url.clone(),
        health,
        latest_milestone,
        error,
    }))
}
