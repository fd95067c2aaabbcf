//! Transfer HTTP handlers.
//!
//! This module implements the transfer endpoints:
//! - POST /send - Submit a transfer through the wallet
//! - GET /history - Page through recorded transfer attempts

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::{
    error::AppError,
    models::transfer::{HistoryQuery, HistoryResponse, SendRequest, SendResponse},
    services::transaction_ledger::Pagination,
    state::AppState,
};

/// Send a transfer.
///
/// # Request Body
///
/// ```json
/// {
///   "from": "rms1qp...",
///   "to": "rms1qz...",
///   "amount": 10
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**:
///
/// ```json
/// {
///   "success": true,
///   "transactionId": "0x5f1c...",
///   "message": "Transaction sent successfully"
/// }
/// ```
///
/// - **Error (400)**: missing field, non-positive amount, or unreadable body. Nothing recorded.
/// - **Error (500)**: wallet not initialized. Nothing recorded.
/// - **Error (500)**: submission failed, `{"error": "...", "transactionId": null}`. Recorded as failed.
pub async fn send_transaction(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<SendResponse>, AppError> {
    // Malformed bodies are validation errors like any other
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected send request body");
        AppError::InvalidRequest(rejection.body_text())
    })?;

    let receipt = state.workflow.execute(request).await?;

    Ok(Json(SendResponse {
        success: true,
        transaction_id: receipt.transaction_id,
        message: "Transaction sent successfully".to_string(),
    }))
}

/// Get transfer history, newest first.
///
/// # Query Parameters
///
/// - `limit` - page size, defaults to 50
/// - `offset` - records to skip, defaults to 0
///
/// Values that are missing, negative or not numbers fall back to the
/// defaults; this endpoint never rejects its query string.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "transactions": [ ... ],
///   "total": 12,
///   "hasMore": false
/// }
/// ```
pub async fn get_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Json<HistoryResponse> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let pagination = Pagination::parse(query.limit.as_deref(), query.offset.as_deref());

    let page = state.ledger.page(pagination.offset, pagination.limit);

    Json(HistoryResponse {
        transactions: page.items,
        total: page.total,
        has_more: page.has_more,
    })
}
