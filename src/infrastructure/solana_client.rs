use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_client::GetConfirmedSignaturesForAddress2Config,
    rpc_config::RpcTransactionConfig, rpc_response::RpcConfirmedTransactionStatusWithSignature,
};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};
use solana_transaction_status::{UiTransactionEncoding, UiTransactionStatusMeta};
use std::{str::FromStr, sync::Arc};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use crate::domain::errors::BcClientError;
use crate::domain::models::{BalanceChanges, FeeSample, SignatureRecord};

use super::bc_client::BcClient;

/// A client for interacting with the Solana blockchain.
#[derive(Clone)]
pub struct SolanaClient {
    rpc_client: Arc<RpcClient>,
    num_retries: usize,
}

impl SolanaClient {
    /// Creates a new `SolanaClient` instance from the given RPC URL.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - The URL of the Solana RPC endpoint.
    /// * `num_retries` - How many times a failed RPC call is retried. `0` means a single attempt.
    ///
    /// # Returns
    ///
    /// A new `SolanaClient` instance.
    pub fn from_url(rpc_url: &str, num_retries: usize) -> Self {
        Self {
            rpc_client: Arc::new(RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            )),
            num_retries,
        }
    }

    fn retry_strategy(&self) -> impl Iterator<Item = std::time::Duration> {
        ExponentialBackoff::from_millis(500)
            .map(jitter)
            .take(self.num_retries)
    }
}

impl From<RpcConfirmedTransactionStatusWithSignature> for SignatureRecord {
    fn from(status: RpcConfirmedTransactionStatusWithSignature) -> Self {
        Self {
            signature: status.signature,
            slot: status.slot,
            block_time: status.block_time,
            err: status
                .err
                .and_then(|err| serde_json::to_value(err).ok()),
        }
    }
}

impl From<UiTransactionStatusMeta> for BalanceChanges {
    fn from(meta: UiTransactionStatusMeta) -> Self {
        let post_token_balances = Option::<Vec<_>>::from(meta.post_token_balances)
            .map_or(0, |balances| balances.len());
        Self {
            pre_balances: meta.pre_balances,
            post_balances: meta.post_balances,
            post_token_balances,
        }
    }
}

#[async_trait::async_trait]
impl BcClient for SolanaClient {
    /// Retrieves the prioritization fees of recent slots, without restricting them to any account.
    async fn get_recent_prioritization_fees(&self) -> Result<Vec<FeeSample>, BcClientError> {
        let result = Retry::spawn(self.retry_strategy(), || {
            self.rpc_client.get_recent_prioritization_fees(&[])
        })
        .await
        .map_err(|e| BcClientError::FailedToGetPrioritizationFees(e.to_string()))?;
        Ok(result
            .into_iter()
            .map(|f| FeeSample {
                slot: f.slot,
                fee: f.prioritization_fee,
            })
            .collect())
    }

    /// Retrieves up to `limit` signatures for `address`, newest first.
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>, BcClientError> {
        let result = Retry::spawn(self.retry_strategy(), || {
            self.rpc_client.get_signatures_for_address_with_config(
                address,
                GetConfirmedSignaturesForAddress2Config {
                    before: None,
                    until: None,
                    limit: Some(limit),
                    commitment: Some(CommitmentConfig::confirmed()),
                },
            )
        })
        .await
        .map_err(|e| BcClientError::FailedToGetSignatures(address.to_string(), e.to_string()))?;
        Ok(result.into_iter().map(SignatureRecord::from).collect())
    }

    /// Retrieves a transaction and keeps only its balance metadata.
    ///
    /// Versioned (v0) transactions are accepted alongside legacy ones.
    async fn get_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<BalanceChanges>, BcClientError> {
        let parsed = Signature::from_str(signature)
            .map_err(|_| BcClientError::InvalidSignature(signature.to_string()))?;

        let result = Retry::spawn(self.retry_strategy(), || {
            self.rpc_client.get_transaction_with_config(
                &parsed,
                RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::Json),
                    commitment: Some(CommitmentConfig::confirmed()),
                    max_supported_transaction_version: Some(0),
                },
            )
        })
        .await
        .map_err(|e| BcClientError::FailedToGetTransaction(signature.to_string(), e.to_string()))?;
        Ok(result.transaction.meta.map(BalanceChanges::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status_meta(post_token_balances: Option<serde_json::Value>) -> UiTransactionStatusMeta {
        let mut meta = json!({
            "err": null,
            "status": { "Ok": null },
            "fee": 5000,
            "preBalances": [2_000_000_000u64, 10],
            "postBalances": [1_999_995_000u64, 10],
        });
        if let Some(balances) = post_token_balances {
            meta["postTokenBalances"] = balances;
        }
        serde_json::from_value(meta).unwrap()
    }

    #[test]
    fn signature_status_keeps_error_as_json() {
        let status: RpcConfirmedTransactionStatusWithSignature = serde_json::from_value(json!({
            "signature": "sig-a",
            "slot": 77,
            "err": { "InstructionError": [0, { "Custom": 1 }] },
            "memo": null,
            "blockTime": 1_700_000_000,
            "confirmationStatus": "confirmed",
        }))
        .unwrap();

        let record = SignatureRecord::from(status);

        assert_eq!(record.signature, "sig-a");
        assert_eq!(record.slot, 77);
        assert_eq!(record.block_time, Some(1_700_000_000));
        assert_eq!(
            record.err,
            Some(json!({ "InstructionError": [0, { "Custom": 1 }] }))
        );
    }

    #[test]
    fn signature_status_without_error_has_none() {
        let status: RpcConfirmedTransactionStatusWithSignature = serde_json::from_value(json!({
            "signature": "sig-b",
            "slot": 78,
            "err": null,
            "memo": null,
            "blockTime": null,
            "confirmationStatus": null,
        }))
        .unwrap();

        let record = SignatureRecord::from(status);

        assert_eq!(record.err, None);
        assert_eq!(record.block_time, None);
    }

    #[test]
    fn absent_or_null_token_balances_count_as_zero() {
        let skipped = BalanceChanges::from(status_meta(None));
        assert_eq!(skipped.post_token_balances, 0);
        assert_eq!(skipped.pre_balances, vec![2_000_000_000, 10]);
        assert_eq!(skipped.post_balances, vec![1_999_995_000, 10]);

        let null = BalanceChanges::from(status_meta(Some(json!(null))));
        assert_eq!(null.post_token_balances, 0);

        let empty = BalanceChanges::from(status_meta(Some(json!([]))));
        assert_eq!(empty.post_token_balances, 0);
    }

    #[test]
    fn token_balances_are_counted() {
        let changes = BalanceChanges::from(status_meta(Some(json!([{
            "accountIndex": 2,
            "mint": "So11111111111111111111111111111111111111112",
            "uiTokenAmount": {
                "uiAmount": 1.5,
                "decimals": 9,
                "amount": "1500000000",
                "uiAmountString": "1.5"
            }
        }]))));

        assert_eq!(changes.post_token_balances, 1);
    }
}
