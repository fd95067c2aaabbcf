//! Transfer data models and API request/response types.
//!
//! This module defines:
//! - `SendRequest`: raw body of `POST /send`, before validation
//! - `TransferRequest`: a validated transfer, ready for submission
//! - `TransferRecord`: ledger entry describing one attempt and its outcome
//! - Response bodies for `/send` and `/history`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;

/// Body of `POST /send` as received.
///
/// Every field is optional here so that a missing field becomes a 400 with a
/// readable message instead of an extractor rejection.
///
/// # JSON Example
///
/// ```json
/// {
///   "from": "rms1qp...",
///   "to": "rms1qz...",
///   "amount": 10.5
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    /// A JSON number, or a string holding one
    pub amount: Option<Value>,
}

/// A transfer that passed validation.
///
/// Addresses are only checked for presence. Format checks belong to the wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub sender: String,
    pub recipient: String,
    /// Display amount, always finite and > 0
    pub amount: f64,
}

impl TryFrom<SendRequest> for TransferRequest {
    type Error = AppError;

    fn try_from(request: SendRequest) -> Result<Self, Self::Error> {
        let (Some(sender), Some(recipient), Some(amount)) = (
            non_empty(request.from),
            non_empty(request.to),
            request.amount,
        ) else {
            return Err(AppError::InvalidRequest(
                "Missing required fields: from, to, amount".to_string(),
            ));
        };

        let amount = match amount {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| AppError::InvalidRequest("Amount must be a positive number".to_string()))?;

        Ok(Self {
            sender,
            recipient,
            amount,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Outcome of a transfer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Completed,
    Failed,
}

/// One attempted transfer, as kept in the transaction ledger.
///
/// Records are never modified after creation. Build them through
/// [`TransferRecord::completed`] or [`TransferRecord::failed`], which keep
/// the status, transaction id and error message consistent:
///
/// - `completed` ⇒ `external_transaction_id` is set, `error_message` is not
/// - `failed` ⇒ `external_transaction_id` is not set, `error_message` is
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "0b9c8f5e-6a0e-4c1f-9d0f-4f2a7f3e2c11",
///   "transactionId": "0x5f1c...",
///   "from": "rms1qp...",
///   "to": "rms1qz...",
///   "amount": 10.0,
///   "networkFee": 0,
///   "timestamp": "2025-12-21T16:00:00Z",
///   "status": "completed"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub id: String,

    #[serde(rename = "transactionId")]
    pub external_transaction_id: Option<String>,

    pub from: String,

    pub to: String,

    pub amount: f64,

    /// Always 0, the network charges no fees
    pub network_fee: u64,

    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,

    pub status: TransferStatus,

    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TransferRecord {
    pub fn completed(request: &TransferRequest, external_transaction_id: String) -> Self {
        Self::new(
            request,
            TransferStatus::Completed,
            Some(external_transaction_id),
            None,
        )
    }

    pub fn failed(request: &TransferRequest, error_message: String) -> Self {
        Self::new(request, TransferStatus::Failed, None, Some(error_message))
    }

    fn new(
        request: &TransferRequest,
        status: TransferStatus,
        external_transaction_id: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            external_transaction_id,
            from: request.sender.clone(),
            to: request.recipient.clone(),
            amount: request.amount,
            network_fee: 0,
            created_at: Utc::now(),
            status,
            error_message,
        }
    }
}

/// Successful response body of `POST /send`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

/// Query string of `GET /history`.
///
/// Kept as raw strings: anything that does not parse falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Response body of `GET /history`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub transactions: Vec<TransferRecord>,
    pub total: usize,
    pub has_more: bool,
}
