//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::{fmt, time::Duration};

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MNEMONIC` (required): wallet secret, startup aborts without it
/// - `PORT` (optional): HTTP server port, defaults to 3000
/// - `NODE_URL` (optional): ledger node queried for network status
/// - `NETWORK_NAME` (optional): network label reported by `/network-info`
/// - `WALLET_DB_PATH` (optional): directory of the wallet's account database
/// - `ACCOUNT_ALIAS` (optional): wallet account used for sends
/// - `BECH32_HRP` (optional): address prefix used when the account has to be created
/// - `LEDGER_TIMEOUT_SECS` (optional): timeout on transfer submission, unset means wait forever, 0 is rejected
#[derive(Clone, Deserialize)]
pub struct Config {
    pub mnemonic: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_node_url")]
    pub node_url: String,

    #[serde(default = "default_network_name")]
    pub network_name: String,

    #[serde(default = "default_wallet_db_path")]
    pub wallet_db_path: String,

    #[serde(default = "default_account_alias")]
    pub account_alias: String,

    #[serde(default = "default_bech32_hrp")]
    pub bech32_hrp: String,

    #[serde(default)]
    pub ledger_timeout_secs: Option<u64>,
}

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("MNEMONIC must not be empty")]
    EmptyMnemonic,

    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("LEDGER_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

fn default_port() -> u16 {
    3000
}

fn default_node_url() -> String {
    "https://api.testnet.shimmer.network".to_string()
}

fn default_network_name() -> String {
    "shimmer-testnet".to_string()
}

fn default_wallet_db_path() -> String {
    "./wallet-db".to_string()
}

fn default_account_alias() -> String {
    "remittance-account".to_string()
}

fn default_bech32_hrp() -> String {
    "rms".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `MNEMONIC` is missing or blank
    /// - A value cannot be parsed into the expected type
    /// - `NODE_URL` is not a valid URL
    /// - `LEDGER_TIMEOUT_SECS` is 0
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // Field names are converted automatically: node_url -> NODE_URL
        let config = envy::from_env::<Config>()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mnemonic.trim().is_empty() {
            return Err(ConfigError::EmptyMnemonic);
        }

        url::Url::parse(&self.node_url).map_err(|source| ConfigError::InvalidUrl {
            name: "NODE_URL",
            source,
        })?;

        if self.ledger_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }

    /// Timeout applied to transfer submission, if one was configured.
    pub fn ledger_timeout(&self) -> Option<Duration> {
        self.ledger_timeout_secs.map(Duration::from_secs)
    }
}

// Hand-written so the mnemonic never reaches the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mnemonic", &"<redacted>")
            .field("port", &self.port)
            .field("node_url", &self.node_url)
            .field("network_name", &self.network_name)
            .field("wallet_db_path", &self.wallet_db_path)
            .field("account_alias", &self.account_alias)
            .field("bech32_hrp", &self.bech32_hrp)
            .field("ledger_timeout_secs", &self.ledger_timeout_secs)
            .finish()
    }
}
