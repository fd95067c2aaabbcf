//! Wallet readiness.
//!
//! The HTTP listener comes up before the wallet account is open. Until
//! [`bootstrap`] installs a client, anything that needs the wallet gets
//! [`AppError::WalletNotInitialized`].

use std::sync::{Arc, OnceLock};

use crate::{
    client::{IotaWallet, LedgerClient, LedgerError},
    config::Config,
    error::AppError,
};

/// Shared slot for the ledger client, filled once.
#[derive(Clone, Default)]
pub struct WalletHandle {
    client: Arc<OnceLock<Arc<dyn LedgerClient>>>,
}

impl WalletHandle {
    /// A handle with no client yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// A handle that is ready from the start.
    pub fn ready(client: Arc<dyn LedgerClient>) -> Self {
        let handle = Self::pending();
        handle.install(client);
        handle
    }

    /// Fill the slot. The first client wins; later ones are dropped with a warning.
    pub fn install(&self, client: Arc<dyn LedgerClient>) {
        if self.client.set(client).is_err() {
            tracing::warn!("Wallet client already installed, keeping the existing one");
        }
    }

    pub fn client(&self) -> Result<Arc<dyn LedgerClient>, AppError> {
        self.client
            .get()
            .cloned()
            .ok_or(AppError::WalletNotInitialized)
    }
}

/// Open the wallet account and make it available through `wallet`.
///
/// Account lookup and account creation failures are not told apart from
/// other bootstrap failures; all of them are returned as-is.
pub async fn bootstrap(config: &Config, wallet: &WalletHandle) -> Result<(), LedgerError> {
    let client = IotaWallet::connect(config).await?;

    let address = client.address().await?;
    tracing::info!(%address, "Wallet initialized successfully");

    wallet.install(Arc::new(client));
    Ok(())
}
