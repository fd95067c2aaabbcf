//! Response bodies for the wallet and network endpoints.

use serde::Serialize;

use crate::client::Balance;

/// Response body of `GET /wallet-info`.
///
/// # JSON Example
///
/// ```json
/// {
///   "address": "rms1qp...",
///   "balance": { "total": "1000000", "available": "1000000" }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct WalletInfoResponse {
    pub address: String,
    pub balance: BalanceResponse,
}

/// Base-coin amounts, rendered as strings of base units.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub total: String,
    pub available: String,
}

impl From<Balance> for BalanceResponse {
    fn from(balance: Balance) -> Self {
        Self {
            total: balance.total.to_string(),
            available: balance.available.to_string(),
        }
    }
}

/// Response body of `GET /network-info`.
///
/// When the node cannot be reached `health` is false, `latestMilestone` is
/// omitted and `error` is set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfoResponse {
    pub network: String,
    pub node_url: String,
    pub health: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_milestone: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
