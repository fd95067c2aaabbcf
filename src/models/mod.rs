//! Data models for requests, responses and ledger records.

/// Transfer requests, ledger records and history pages
pub mod transfer;
/// Wallet, network and health responses
pub mod wallet;
