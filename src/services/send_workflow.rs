//! Send workflow - one transfer attempt from request to ledger entry.
//!
//! # Process
//!
//! 1. Validate the request (rejections leave no trace in the ledger)
//! 2. Check the wallet is initialized
//! 3. Convert the display amount to base units
//! 4. Submit through the ledger client
//! 5. Record the outcome, success or failure, then report it
//!
//! # Recording Guarantee
//!
//! Every request that passes validation and reaches submission adds exactly
//! one record to the ledger. There are no automatic retries.
//!
//! # Ordering
//!
//! Records land in the order submissions finish, not the order requests
//! arrived. The ledger lock is never held across the submission await.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use crate::{
    client::{LedgerClient, LedgerError, TransferAttachment},
    error::AppError,
    models::transfer::{SendRequest, TransferRecord, TransferRequest},
    services::{transaction_ledger::TransactionStore, wallet::WalletHandle},
};

/// Base units per display unit of the native coin.
pub const BASE_UNITS_PER_COIN: u64 = 1_000_000;

const BASE_UNIT_DECIMALS: usize = 6;

/// Tag attached to every remittance transfer, before hex encoding.
pub const REMITTANCE_TAG: &str = "REMITTANCE";

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub transaction_id: String,
}

/// Executes transfer requests against the wallet and records every attempt.
#[derive(Clone)]
pub struct SendWorkflow {
    wallet: WalletHandle,
    ledger: Arc<dyn TransactionStore>,
    timeout: Option<Duration>,
}

impl SendWorkflow {
    pub fn new(wallet: WalletHandle, ledger: Arc<dyn TransactionStore>) -> Self {
        Self {
            wallet,
            ledger,
            timeout: None,
        }
    }

    /// Bound the submission call. Without this a hung ledger client hangs
    /// the request with it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one transfer attempt.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: missing sender/recipient, or amount not a positive number. Not recorded.
    /// - `WalletNotInitialized`: wallet bootstrap has not finished. Not recorded.
    /// - `TransferFailed`: the ledger client failed. Recorded as a failed transfer first.
    pub async fn execute(&self, request: SendRequest) -> Result<SendReceipt, AppError> {
        let request = TransferRequest::try_from(request).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected send request");
        })?;
        let client = self.wallet.client()?;

        let base_units = to_base_units(request.amount);
        let attachment = remittance_attachment(&request.sender, Utc::now());
        tracing::info!(
            "Sending {} tokens from {} to {}",
            base_units,
            request.sender,
            request.recipient
        );

        match self
            .submit(client.as_ref(), base_units, &request.recipient, &attachment)
            .await
        {
            Ok(transaction_id) => {
                self.ledger
                    .append(TransferRecord::completed(&request, transaction_id.clone()));
                tracing::info!(%transaction_id, "Transaction sent successfully");

                Ok(SendReceipt { transaction_id })
            }
            Err(error) => {
                let message = error.to_string();
                tracing::error!(error = %message, "Error sending transaction");
                self.ledger
                    .append(TransferRecord::failed(&request, message.clone()));

                Err(AppError::TransferFailed(message))
            }
        }
    }

    async fn submit(
        &self,
        client: &dyn LedgerClient,
        base_units: u64,
        recipient: &str,
        attachment: &TransferAttachment,
    ) -> Result<String, LedgerError> {
        let send = client.send_transfer(base_units, recipient, attachment);

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| LedgerError::Timeout(limit))?,
            None => send.await,
        }
    }
}

/// Convert a display amount to base units, truncating below the sixth
/// decimal place.
///
/// Works on the shortest decimal rendering of `amount`, so `2.01` gives
/// `2010000` rather than the `2009999` that `floor(2.01 * 1e6)` yields.
/// Amounts beyond `u64::MAX` base units saturate. Non-positive or
/// non-finite input gives 0.
pub fn to_base_units(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }

    // f64 Display never uses exponent notation
    let rendered = amount.to_string();
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut fraction: String = fraction.chars().take(BASE_UNIT_DECIMALS).collect();
    while fraction.len() < BASE_UNIT_DECIMALS {
        fraction.push('0');
    }

    let whole = whole.parse::<u128>().unwrap_or(u128::MAX);
    let fraction = fraction.parse::<u128>().unwrap_or(0);

    whole
        .checked_mul(u128::from(BASE_UNITS_PER_COIN))
        .and_then(|units| units.checked_add(fraction))
        .and_then(|units| u64::try_from(units).ok())
        .unwrap_or(u64::MAX)
}

/// Tag and metadata for a remittance sent on behalf of `sender`.
pub fn remittance_attachment(sender: &str, now: DateTime<Utc>) -> TransferAttachment {
    let metadata = json!({
        "type": "remittance",
        "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true),
        "from": sender,
    });

    TransferAttachment {
        tag: format!("0x{}", hex::encode(REMITTANCE_TAG)),
        metadata: format!("0x{}", hex::encode(metadata.to_string())),
    }
}
