use crate::domain::errors::BcClientError;
use crate::domain::models::{BalanceChanges, FeeSample, SignatureRecord};
use solana_sdk::pubkey::Pubkey;

/// A trait representing a blockchain client for interacting with the Solana network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BcClient {
    /// Retrieves the prioritization fees paid in recent slots.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<FeeSample>, BcClientError>` - One sample per recent slot if successful, or an error if the operation fails.
    async fn get_recent_prioritization_fees(&self) -> Result<Vec<FeeSample>, BcClientError>;

    /// Retrieves the most recent transaction signatures involving an address.
    ///
    /// # Arguments
    ///
    /// * `address` - The account to look up.
    /// * `limit` - The maximum number of signatures to return.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<SignatureRecord>, BcClientError>` - Signatures newest first, or an error if the operation fails.
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>, BcClientError>;

    /// Retrieves the balance changes recorded by a confirmed transaction.
    ///
    /// # Arguments
    ///
    /// * `signature` - The base58 transaction signature.
    ///
    /// # Returns
    ///
    /// * `Result<Option<BalanceChanges>, BcClientError>` - `None` when the node returns the transaction without status metadata.
    async fn get_transaction(&self, signature: &str)
        -> Result<Option<BalanceChanges>, BcClientError>;
}
