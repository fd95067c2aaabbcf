//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::client::LedgerError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: missing or malformed request fields, rejected before any side effect
/// - **External Service Errors**: the ledger client failed; send failures are recorded before they reach here
/// - **Initialization Errors**: the wallet account is not ready yet
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Wallet bootstrap has not finished (or failed).
    ///
    /// Returns HTTP 500. Nothing is recorded.
    #[error("Wallet not initialized")]
    WalletNotInitialized,

    /// Transfer submission failed. The attempt is already in the ledger.
    ///
    /// Returns HTTP 500 with `transactionId: null`.
    #[error("{0}")]
    TransferFailed(String),

    /// Balance lookup failed after the address was resolved.
    ///
    /// Returns HTTP 500 with the address and a zero balance.
    #[error("{source}")]
    BalanceUnavailable {
        address: String,
        #[source]
        source: LedgerError,
    },

    /// Any other ledger client failure.
    ///
    /// Returns HTTP 500 with the underlying message.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// Every error carries a human-readable `error` string:
/// ```json
/// { "error": "Missing required fields: from, to, amount" }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - everything else → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::TransferFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "transactionId": null }),
            ),
            AppError::BalanceUnavailable { address, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": message,
                    "address": address,
                    "balance": { "total": "0", "available": "0" }
                }),
            ),
            AppError::WalletNotInitialized | AppError::Ledger(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}
