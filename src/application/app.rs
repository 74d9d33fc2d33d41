use std::str::FromStr;
use std::sync::Arc;

use super::fees::most_recent;
use super::transactions::summarize;
use super::Application;
use crate::domain::errors::{ApplicationError, BcClientError};
use crate::domain::models::{FeeReport, TransactionSummary};
use crate::domain::policy::{DegradeToDefault, PartialResultTolerant};
use crate::infrastructure::bc_client::BcClient;
use crate::infrastructure::solana_client::SolanaClient;
use solana_sdk::pubkey::Pubkey;
use tokio::task::JoinSet;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct App<C> {
    bc_client: Arc<C>,
    #[builder(default = 150)]
    max_fee_samples: usize,
    #[builder(default)]
    fee_policy: DegradeToDefault,
    #[builder(default)]
    lookup_policy: PartialResultTolerant,
}

impl App<SolanaClient> {
    pub fn from_url(endpoint: &str, num_retries: usize, max_fee_samples: usize) -> Self {
        tracing::info!("Using Solana RPC endpoint {}", endpoint);
        App::builder()
            .bc_client(Arc::new(SolanaClient::from_url(endpoint, num_retries)))
            .max_fee_samples(max_fee_samples)
            .build()
    }
}

#[async_trait::async_trait]
impl<C> Application for App<C>
where
    C: BcClient + Send + Sync + 'static,
{
    async fn estimate_fees(&self) -> Result<FeeReport, ApplicationError> {
        tracing::info!("Estimating fees ...");
        let samples = self.fee_policy.recover(
            "Fetching prioritization fees",
            self.bc_client.get_recent_prioritization_fees().await,
        );
        let samples = most_recent(samples, self.max_fee_samples);
        tracing::debug!("Using {} prioritization fee samples", samples.len());
        Ok(FeeReport::from_samples(&samples))
    }

    async fn get_wallet_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>, ApplicationError> {
        let pubkey = Pubkey::from_str(address)
            .map_err(|_| ApplicationError::InvalidAddress(address.to_string()))?;
        tracing::info!("Getting up to {} transactions for {}", limit, pubkey);

        let records = self
            .bc_client
            .get_signatures_for_address(&pubkey, limit)
            .await?;

        let mut join_set = JoinSet::new();
        for (idx, record) in records.iter().enumerate() {
            let client = self.bc_client.clone();
            let signature = record.signature.clone();
            join_set.spawn(async move { (idx, client.get_transaction(&signature).await) });
        }

        let mut lookups = Vec::with_capacity(records.len());
        lookups.resize_with(records.len(), || None);
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((idx, lookup)) => lookups[idx] = Some(lookup),
                Err(e) => {
                    // The slot stays empty and falls back to the record below.
                    tracing::error!("JoinSet error: {:?}", e);
                }
            }
        }

        let summaries = records
            .iter()
            .zip(lookups)
            .map(|(record, lookup)| {
                let lookup = lookup.unwrap_or_else(|| {
                    Err(BcClientError::FailedToGetTransaction(
                        record.signature.clone(),
                        "lookup task aborted".to_string(),
                    ))
                });
                self.lookup_policy.recover(
                    &record.signature,
                    lookup.map(|changes| summarize(record, changes.as_ref())),
                    || TransactionSummary::from_record(record),
                )
            })
            .collect();

        Ok(summaries)
    }
}
