//! [`LedgerClient`] backed by the IOTA SDK wallet.
//!
//! The SDK owns the mnemonic secret manager and the account database under
//! `WALLET_DB_PATH`, and builds, signs and submits transactions with local
//! proof of work. Node health is read through [`NodeClient`].

use std::{fmt::Display, future::Future};

use async_trait::async_trait;
use iota_sdk::{
    client::{
        constants::SHIMMER_COIN_TYPE,
        secret::{SecretManager, mnemonic::MnemonicSecretManager},
    },
    types::block::{address::Hrp, payload::TaggedDataPayload},
    wallet::{
        ClientOptions, Wallet,
        account::{Account, TransactionOptions},
    },
};

use super::{Balance, LedgerClient, LedgerError, NetworkStatus, NodeClient, TransferAttachment};
use crate::config::Config;

/// The remittance account of an SDK wallet.
pub struct IotaWallet {
    account: Account,
    node: NodeClient,
}

impl IotaWallet {
    /// Open the wallet database, get the configured account or create it
    /// from the mnemonic, then sync it with the node.
    pub async fn connect(config: &Config) -> Result<Self, LedgerError> {
        let node = NodeClient::new(&config.node_url)?;
        let bech32_hrp: Hrp = config.bech32_hrp.parse().map_err(|e| {
            LedgerError::InvalidConfig(format!("BECH32_HRP {:?}: {e}", config.bech32_hrp))
        })?;

        let secret_manager = MnemonicSecretManager::try_from_mnemonic(config.mnemonic.clone())?;
        let client_options = ClientOptions::new()
            .with_node(&config.node_url)?
            .with_local_pow(true);

        let wallet = Wallet::builder()
            .with_secret_manager(SecretManager::Mnemonic(secret_manager))
            .with_storage_path(config.wallet_db_path.as_str())
            .with_client_options(client_options)
            .with_coin_type(SHIMMER_COIN_TYPE)
            .finish()
            .await?;

        let alias = config.account_alias.clone();
        let lookup = wallet.get_account(alias.clone()).await;
        let account = open_or_create(&alias, lookup, || async {
            wallet
                .create_account()
                .with_alias(alias.clone())
                .with_bech32_hrp(Some(bech32_hrp))
                .finish()
                .await
        })
        .await?;

        account.sync(None).await?;
        tracing::info!(%alias, "Account synced");

        Ok(Self { account, node })
    }
}

#[async_trait]
impl LedgerClient for IotaWallet {
    async fn address(&self) -> Result<String, LedgerError> {
        let addresses = self.account.addresses().await?;

        addresses
            .first()
            .map(|address| address.address().to_string())
            .ok_or_else(|| LedgerError::InvalidResponse("account has no addresses".to_string()))
    }

    async fn balance(&self) -> Result<Balance, LedgerError> {
        let balance = self.account.balance().await?;
        let base_coin = balance.base_coin();

        Ok(Balance {
            total: base_coin.total(),
            available: base_coin.available(),
        })
    }

    async fn send_transfer(
        &self,
        base_units: u64,
        recipient: &str,
        attachment: &TransferAttachment,
    ) -> Result<String, LedgerError> {
        let (tag, data) = decode_attachment(attachment)?;
        let payload = TaggedDataPayload::new(tag, data)
            .map_err(|e| LedgerError::InvalidAttachment(e.to_string()))?;
        let options = TransactionOptions {
            tagged_data_payload: Some(payload),
            ..Default::default()
        };

        let transaction = self.account.send(base_units, recipient, options).await?;
        Ok(transaction.transaction_id.to_string())
    }

    async fn network_status(&self) -> Result<NetworkStatus, LedgerError> {
        self.node.status().await
    }
}

/// Use the looked-up account, or create one when the lookup failed for any
/// reason. Creation errors are returned unchanged.
async fn open_or_create<T, E, F, Fut>(alias: &str, lookup: Result<T, E>, create: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match lookup {
        Ok(account) => Ok(account),
        Err(error) => {
            tracing::info!(%alias, %error, "Account not found, creating it");
            create().await
        }
    }
}

/// Raw tag and data bytes of a `0x`-prefixed hex attachment.
fn decode_attachment(attachment: &TransferAttachment) -> Result<(Vec<u8>, Vec<u8>), LedgerError> {
    let decode = |field: &str, value: &str| {
        hex::decode(value.strip_prefix("0x").unwrap_or(value))
            .map_err(|e| LedgerError::InvalidAttachment(format!("{field}: {e}")))
    };

    Ok((
        decode("tag", &attachment.tag)?,
        decode("metadata", &attachment.metadata)?,
    ))
}
