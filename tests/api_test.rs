//! API route tests.
//!
//! These tests drive the full router in-process and verify:
//! - Response shapes and field names
//! - Status codes for validation, initialization and send failures
//! - That every validated send is recorded, and rejected ones are not

mod common;

use axum::http::StatusCode;
use common::{
    ADDRESS, MockLedgerClient, get_json, post_json, post_raw, test_app, uninitialized_app,
};
use remittance_backend::services::transaction_ledger::TransactionStore;
use serde_json::{Value, json};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_reports_ok_without_wallet() {
    let (router, _ledger) = uninitialized_app();

    let (status, json) = get_json(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "IOTA Remittance API is running");
}

// ============================================================================
// Wallet info
// ============================================================================

#[tokio::test]
async fn test_wallet_info_returns_address_and_string_balance() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));

    let (status, json) = get_json(&router, "/wallet-info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["address"], ADDRESS);
    assert_eq!(json["balance"]["total"], "5000000");
    assert_eq!(json["balance"]["available"], "4000000");
}

#[tokio::test]
async fn test_wallet_info_before_initialization_is_500() {
    let (router, _ledger) = uninitialized_app();

    let (status, json) = get_json(&router, "/wallet-info").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Wallet not initialized");
}

#[tokio::test]
async fn test_wallet_info_balance_failure_defaults_to_zero() {
    let (router, _ledger, _client) =
        test_app(MockLedgerClient::succeeding("tx").without_balance());

    let (status, json) = get_json(&router, "/wallet-info").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "balance unavailable");
    assert_eq!(json["address"], ADDRESS);
    assert_eq!(json["balance"], json!({"total": "0", "available": "0"}));
}

// ============================================================================
// Send
// ============================================================================

#[tokio::test]
async fn test_send_success_is_recorded_first_in_history() {
    let (router, ledger, client) = test_app(MockLedgerClient::succeeding("tx123"));

    let (status, json) = post_json(
        &router,
        "/send",
        json!({"from": "A", "to": "B", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["transactionId"], "tx123");
    assert_eq!(json["message"], "Transaction sent successfully");
    assert_eq!(ledger.len(), 1);

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].base_units, 10_000_000);
    assert_eq!(sent[0].recipient, "B");

    let (status, history) = get_json(&router, "/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["total"], 1);
    assert_eq!(history["hasMore"], false);

    let record = &history["transactions"][0];
    assert_eq!(record["status"], "completed");
    assert_eq!(record["transactionId"], "tx123");
    assert_eq!(record["from"], "A");
    assert_eq!(record["to"], "B");
    assert_eq!(record["amount"], 10.0);
    assert_eq!(record["networkFee"], 0);
    assert!(record.get("error").is_none());
}

#[tokio::test]
async fn test_send_failure_is_recorded_and_returns_500() {
    let (router, ledger, _client) = test_app(MockLedgerClient::failing("insufficient funds"));

    let (status, json) = post_json(
        &router,
        "/send",
        json!({"from": "A", "to": "B", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "insufficient funds");
    assert_eq!(json["transactionId"], Value::Null);
    assert_eq!(ledger.len(), 1);

    let (_, history) = get_json(&router, "/history").await;
    let record = &history["transactions"][0];
    assert_eq!(record["status"], "failed");
    assert_eq!(record["transactionId"], Value::Null);
    assert_eq!(record["error"], "insufficient funds");
}

#[tokio::test]
async fn test_send_with_empty_sender_is_400_and_not_recorded() {
    let (router, ledger, client) = test_app(MockLedgerClient::succeeding("tx"));

    let (status, json) = post_json(
        &router,
        "/send",
        json!({"from": "", "to": "B", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required fields: from, to, amount");
    assert!(ledger.is_empty());
    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn test_send_rejects_invalid_bodies_without_recording() {
    let (router, ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));

    for body in [
        json!({"to": "B", "amount": 10}),
        json!({"from": "A", "amount": 10}),
        json!({"from": "A", "to": "B"}),
        json!({"from": "A", "to": "B", "amount": 0}),
        json!({"from": "A", "to": "B", "amount": -5}),
        json!({"from": "A", "to": "B", "amount": "lots"}),
        json!({"from": 7, "to": "B", "amount": 1}),
    ] {
        let (status, json) = post_json(&router, "/send", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(json["error"].is_string(), "body: {body}");
    }

    let (status, json) = post_raw(&router, "/send", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    assert!(ledger.is_empty());
}

#[tokio::test]
async fn test_send_before_initialization_is_500_and_not_recorded() {
    let (router, ledger) = uninitialized_app();

    let (status, json) = post_json(
        &router,
        "/send",
        json!({"from": "A", "to": "B", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Wallet not initialized");
    assert!(ledger.is_empty());
}

#[tokio::test]
async fn test_send_validates_before_checking_wallet() {
    let (router, _ledger) = uninitialized_app();

    let (status, _) = post_json(&router, "/send", json!({"from": "A", "to": "B"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// History
// ============================================================================

async fn send_many(router: &axum::Router, count: usize) {
    for n in 0..count {
        let (status, _) = post_json(
            router,
            "/send",
            json!({"from": format!("sender-{n}"), "to": "B", "amount": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

fn senders(history: &Value) -> Vec<String> {
    history["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["from"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_history_empty() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));

    let (status, json) = get_json(&router, "/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"transactions": [], "total": 0, "hasMore": false}));
}

#[tokio::test]
async fn test_history_paginates_newest_first() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));
    send_many(&router, 5).await;

    let (_, first) = get_json(&router, "/history?limit=2").await;
    assert_eq!(senders(&first), ["sender-4", "sender-3"]);
    assert_eq!(first["total"], 5);
    assert_eq!(first["hasMore"], true);

    let (_, last) = get_json(&router, "/history?limit=2&offset=4").await;
    assert_eq!(senders(&last), ["sender-0"]);
    assert_eq!(last["hasMore"], false);

    let (_, past_end) = get_json(&router, "/history?offset=10").await;
    assert!(senders(&past_end).is_empty());
    assert_eq!(past_end["total"], 5);
    assert_eq!(past_end["hasMore"], false);
}

#[tokio::test]
async fn test_history_ignores_unparseable_parameters() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));
    send_many(&router, 3).await;

    let (status, json) = get_json(&router, "/history?limit=abc&offset=-2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(senders(&json), ["sender-2", "sender-1", "sender-0"]);
    assert_eq!(json["hasMore"], false);

    // Only the leading integer counts
    let (status, json) = get_json(&router, "/history?limit=2.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(senders(&json), ["sender-2", "sender-1"]);
    assert_eq!(json["hasMore"], true);

    let (_, json) = get_json(&router, "/history?limit=1abc&offset=1.9").await;
    assert_eq!(senders(&json), ["sender-1"]);
    assert_eq!(json["total"], 3);
    assert_eq!(json["hasMore"], true);
}

#[tokio::test]
async fn test_history_reads_are_repeatable() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));
    send_many(&router, 3).await;

    let (_, first) = get_json(&router, "/history?limit=2&offset=1").await;
    let (_, second) = get_json(&router, "/history?limit=2&offset=1").await;

    assert_eq!(first, second);
}

// ============================================================================
// Network info
// ============================================================================

#[tokio::test]
async fn test_network_info_reports_node_status() {
    let (router, _ledger, _client) = test_app(MockLedgerClient::succeeding("tx"));

    let (status, json) = get_json(&router, "/network-info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["network"], "shimmer-testnet");
    assert_eq!(json["nodeUrl"], "https://api.testnet.shimmer.network");
    assert_eq!(json["health"], true);
    assert_eq!(json["latestMilestone"], 4242);
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_network_info_degrades_when_node_unreachable() {
    let (router, _ledger, _client) =
        test_app(MockLedgerClient::succeeding("tx").without_network());

    let (status, json) = get_json(&router, "/network-info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["health"], false);
    assert_eq!(json["error"], "Network unavailable");
    assert!(json.get("latestMilestone").is_none());
    assert_eq!(json["network"], "shimmer-testnet");
}

#[tokio::test]
async fn test_network_info_before_initialization_is_500() {
    let (router, _ledger) = uninitialized_app();

    let (status, json) = get_json(&router, "/network-info").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Wallet not initialized");
}
