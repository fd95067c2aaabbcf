//! Wallet information handler.
//!
//! - GET /wallet-info - address and base-coin balance of the remittance account

use axum::{Json, extract::State};

use crate::{error::AppError, models::wallet::WalletInfoResponse, state::AppState};

/// Get the wallet address and balance.
///
/// # Response
///
/// - **Success (200 OK)**:
///
/// ```json
/// {
///   "address": "rms1qp...",
///   "balance": { "total": "1000000", "available": "1000000" }
/// }
/// ```
///
/// - **Error (500)**: wallet not initialized, or address lookup failed
/// - **Error (500)**: balance lookup failed; the body still carries the
///   address and a zero balance
pub async fn wallet_info(
    State(state): State<AppState>,
) -> Result<Json<WalletInfoResponse>, AppError> {
    let client = state.wallet.client()?;

    let address = client.address().await.inspect_err(|e| {
        tracing::error!(error = %e, "Error getting wallet address");
    })?;

    let balance = match client.balance().await {
        Ok(balance) => balance,
        Err(source) => {
            tracing::error!(error = %source, "Error getting wallet balance");
            return Err(AppError::BalanceUnavailable { address, source });
        }
    };

    Ok(Json(WalletInfoResponse {
        address,
        balance: balance.into(),
    }))
}
