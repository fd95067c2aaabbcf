//! Shared application state handed to every handler.

use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    services::{
        send_workflow::SendWorkflow, transaction_ledger::TransactionStore, wallet::WalletHandle,
    },
};

/// Network details reported by `/network-info`.
#[derive(Debug, Clone)]
pub struct NetworkSettings {
    pub name: String,
    pub node_url: String,
}

impl From<&Config> for NetworkSettings {
    fn from(config: &Config) -> Self {
        Self {
            name: config.network_name.clone(),
            node_url: config.node_url.clone(),
        }
    }
}

/// Everything handlers need, injected via Axum `State`.
///
/// The ledger is shared with the send workflow: the workflow appends, the
/// handlers only read.
#[derive(Clone)]
pub struct AppState {
    pub wallet: WalletHandle,
    pub ledger: Arc<dyn TransactionStore>,
    pub workflow: SendWorkflow,
    pub network: NetworkSettings,
}

impl AppState {
    pub fn new(
        wallet: WalletHandle,
        ledger: Arc<dyn TransactionStore>,
        network: NetworkSettings,
        ledger_timeout: Option<Duration>,
    ) -> Self {
        let workflow =
            SendWorkflow::new(wallet.clone(), Arc::clone(&ledger)).with_timeout(ledger_timeout);

        Self {
            wallet,
            ledger,
            workflow,
            network,
        }
    }
}
