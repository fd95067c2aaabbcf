//! Node health over the ledger node's core REST API.
//!
//! Only `GET {node}/api/core/v2/info` is used. Error responses carry either
//! `{ "error": "msg" }` or `{ "error": { "code": .., "message": "msg" } }`;
//! both are reduced to the bare message.

use reqwest::Response;
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use super::{LedgerError, NetworkStatus};

const NODE_INFO_PATH: &str = "api/core/v2/info";

/// Read-only client for the node the wallet is connected to.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    node_url: Url,
}

#[derive(Deserialize)]
struct NodeInfo {
    status: NodeStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeStatus {
    is_healthy: bool,
    latest_milestone: Option<Milestone>,
}

#[derive(Deserialize)]
struct Milestone {
    index: u32,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Structured { message: String },
}

impl NodeClient {
    /// Build a client without touching the network.
    pub fn new(node_url: &str) -> Result<Self, LedgerError> {
        Ok(Self {
            http: reqwest::Client::new(),
            node_url: base_url(node_url)?,
        })
    }

    pub async fn status(&self) -> Result<NetworkStatus, LedgerError> {
        let response = self
            .http
            .get(self.node_url.join(NODE_INFO_PATH)?)
            .send()
            .await?;
        let info: NodeInfo = read_json(response).await?;

        Ok(NetworkStatus {
            healthy: info.status.is_healthy,
            latest_milestone: info.status.latest_milestone.map(|m| m.index),
        })
    }
}

/// Parse a base URL so that relative joins append to its path instead of
/// replacing the last segment.
fn base_url(raw: &str) -> Result<Url, LedgerError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, LedgerError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LedgerError::InvalidResponse(e.to_string()))
}

/// Turn an error response into [`LedgerError::Rejected`], preferring the
/// node's own error message, then the raw body, then the status line.
async fn rejection(response: Response) -> LedgerError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error: ErrorDetail::Message(message) | ErrorDetail::Structured { message },
        }) => message,
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };

    LedgerError::Rejected(message)
}
