//! Ledger client capability.
//!
//! Address management, balance queries, transfer construction and network
//! status all live behind [`LedgerClient`]. The service never signs or builds
//! transactions itself; it hands amounts and recipients to the client and
//! records whatever comes back.

use std::time::Duration;

use async_trait::async_trait;

pub mod iota;
pub mod node;

pub use iota::IotaWallet;
pub use node::NodeClient;

/// Base-coin balance of the wallet account, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub total: u64,
    pub available: u64,
}

/// Health of the ledger node the wallet talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStatus {
    pub healthy: bool,
    pub latest_milestone: Option<u32>,
}

/// Tagged data attached to every outgoing transfer.
///
/// Both fields are `0x`-prefixed hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAttachment {
    pub tag: String,
    pub metadata: String,
}

/// Failures surfaced by a [`LedgerClient`].
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The node could not be reached.
    #[error("ledger node unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node refused the request. The message is passed through verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The node or wallet answered with something we could not interpret.
    #[error("unexpected response from ledger: {0}")]
    InvalidResponse(String),

    #[error("invalid ledger node URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Account, balance and send failures reported by the wallet SDK.
    #[error(transparent)]
    Wallet(#[from] iota_sdk::wallet::Error),

    #[error(transparent)]
    Client(#[from] iota_sdk::client::Error),

    #[error("invalid transfer attachment: {0}")]
    InvalidAttachment(String),

    #[error("invalid wallet configuration: {0}")]
    InvalidConfig(String),

    /// Only produced when `LEDGER_TIMEOUT_SECS` is set.
    #[error("transfer submission timed out after {0:?}")]
    Timeout(Duration),
}

/// Operations the remittance service needs from the wallet.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Bech32 address of the wallet account.
    async fn address(&self) -> Result<String, LedgerError>;

    async fn balance(&self) -> Result<Balance, LedgerError>;

    /// Submit a transfer of `base_units` to `recipient` and return the
    /// ledger's transaction id.
    async fn send_transfer(
        &self,
        base_units: u64,
        recipient: &str,
        attachment: &TransferAttachment,
    ) -> Result<String, LedgerError>;

    async fn network_status(&self) -> Result<NetworkStatus, LedgerError>;
}
