// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use remittance_backend::{
    AppState, build_router,
    client::{Balance, LedgerClient, LedgerError, NetworkStatus, TransferAttachment},
    services::{
        transaction_ledger::{InMemoryLedger, TransactionStore},
        wallet::WalletHandle,
    },
    state::NetworkSettings,
};
use serde_json::Value;
use tower::ServiceExt;

pub const ADDRESS: &str = "rms1qpwallet";

/// A transfer the mock was asked to submit.
#[derive(Debug, Clone)]
pub struct SentTransfer {
    pub base_units: u64,
    pub recipient: String,
    pub attachment: TransferAttachment,
}

/// Scriptable ledger client.
pub struct MockLedgerClient {
    send_result: Result<String, String>,
    balance: Option<Balance>,
    network: Option<NetworkStatus>,
    delay: Duration,
    sent: Mutex<Vec<SentTransfer>>,
}

impl MockLedgerClient {
    pub fn succeeding(transaction_id: &str) -> Self {
        Self {
            send_result: Ok(transaction_id.to_string()),
            balance: Some(Balance {
                total: 5_000_000,
                available: 4_000_000,
            }),
            network: Some(NetworkStatus {
                healthy: true,
                latest_milestone: Some(4242),
            }),
            delay: Duration::ZERO,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            send_result: Err(message.to_string()),
            ..Self::succeeding("unused")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn without_balance(mut self) -> Self {
        self.balance = None;
        self
    }

    pub fn without_network(mut self) -> Self {
        self.network = None;
        self
    }

    pub fn sent(&self) -> Vec<SentTransfer> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn address(&self) -> Result<String, LedgerError> {
        Ok(ADDRESS.to_string())
    }

    async fn balance(&self) -> Result<Balance, LedgerError> {
        self.balance
            .ok_or_else(|| LedgerError::Rejected("balance unavailable".to_string()))
    }

    async fn send_transfer(
        &self,
        base_units: u64,
        recipient: &str,
        attachment: &TransferAttachment,
    ) -> Result<String, LedgerError> {
        self.sent.lock().unwrap().push(SentTransfer {
            base_units,
            recipient: recipient.to_string(),
            attachment: attachment.clone(),
        });

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.send_result.clone().map_err(LedgerError::Rejected)
    }

    async fn network_status(&self) -> Result<NetworkStatus, LedgerError> {
        self.network
            .ok_or_else(|| LedgerError::Rejected("node unreachable".to_string()))
    }
}

pub fn network_settings() -> NetworkSettings {
    NetworkSettings {
        name: "shimmer-testnet".to_string(),
        node_url: "https://api.testnet.shimmer.network".to_string(),
    }
}

/// State wired to `client`, plus direct handles on the ledger and the mock.
pub fn test_state(client: MockLedgerClient) -> (AppState, Arc<InMemoryLedger>, Arc<MockLedgerClient>) {
    let client = Arc::new(client);
    let ledger = Arc::new(InMemoryLedger::new());
    let state = AppState::new(
        WalletHandle::ready(client.clone()),
        ledger.clone(),
        network_settings(),
        None,
    );
    (state, ledger, client)
}

/// Router with a wallet that never finished bootstrapping.
pub fn uninitialized_app() -> (Router, Arc<InMemoryLedger>) {
    let ledger = Arc::new(InMemoryLedger::new());
    let state = AppState::new(
        WalletHandle::pending(),
        ledger.clone() as Arc<dyn TransactionStore>,
        network_settings(),
        None,
    );
    (build_router(state), ledger)
}

pub fn test_app(client: MockLedgerClient) -> (Router, Arc<InMemoryLedger>, Arc<MockLedgerClient>) {
    let (state, ledger, client) = test_state(client);
    (build_router(state), ledger, client)
}

/// Helper to make a GET request and get response body as JSON.
pub async fn get_json(router: &Router, path: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

/// Helper to make a POST request with a raw body.
pub async fn post_raw(router: &Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

/// Helper to make a POST request with JSON body.
pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, path, &body.to_string()).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
