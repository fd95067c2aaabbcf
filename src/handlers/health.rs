//! Health check endpoint for service monitoring.

use axum::Json;

use crate::models::wallet::HealthResponse;

/// Health check handler.
///
/// Does not touch the wallet: the service is "up" as soon as it listens.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "OK",
///   "message": "IOTA Remittance API is running"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "IOTA Remittance API is running".to_string(),
    })
}
