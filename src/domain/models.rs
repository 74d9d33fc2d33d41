use serde::{Deserialize, Serialize};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Converts a lamport amount to its SOL display value.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// A prioritization fee observed in a recent slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSample {
    /// Slot the fee was observed in
    pub slot: u64,
    /// Prioritization fee reported by the node for that slot
    pub fee: u64,
}

/// A fee amount expressed both in lamports and in SOL.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct FeeEstimate {
    pub lamports: u64,
    pub sol: f64,
}

impl FeeEstimate {
    pub fn from_lamports(lamports: u64) -> Self {
        Self {
            lamports,
            sol: lamports_to_sol(lamports),
        }
    }
}

/// Summary statistics over the non-zero prioritization fees of recent slots.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PrioritizationFeeStats {
    pub average: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
}

/// Fee estimates for the transaction kinds a wallet typically sends.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimates {
    pub simple_transfer: FeeEstimate,
    pub token_transfer: FeeEstimate,
    pub swap: FeeEstimate,
    pub nft_transfer: FeeEstimate,
    pub smart_contract: FeeEstimate,
}

/// Payload of the fee endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeReport {
    pub base_fee: FeeEstimate,
    pub prioritization_fees: PrioritizationFeeStats,
    pub estimates: FeeEstimates,
}

/// A signature entry as returned by the node for an address.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureRecord {
    pub signature: String,
    pub slot: u64,
    /// Unix timestamp of the block, when the node knows it
    pub block_time: Option<i64>,
    /// Transaction error as reported by the node, kept opaque
    pub err: Option<serde_json::Value>,
}

/// The balance movements recorded in a transaction's status metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceChanges {
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
    /// Number of token balances present after the transaction executed
    pub post_token_balances: usize,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Sent,
    Received,
    Swap,
    Other,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
}

/// A wallet transaction reshaped for display.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TransactionSummary {
    pub signature: String,
    #[serde(rename = "blockTime")]
    pub block_time: Option<i64>,
    pub slot: u64,
    pub err: Option<serde_json::Value>,
    /// Absolute SOL movement of the first account
    #[serde(rename = "solAmount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub category: TransactionCategory,
    pub status: TransactionStatus,
}

impl TransactionSummary {
    /// Builds the summary from the signature record alone, without any balance data.
    pub fn from_record(record: &SignatureRecord) -> Self {
        Self {
            signature: record.signature.clone(),
            block_time: record.block_time,
            slot: record.slot,
            err: record.err.clone(),
            amount: 0.0,
            category: TransactionCategory::Other,
            status: if record.err.is_some() {
                TransactionStatus::Failed
            } else {
                TransactionStatus::Success
            },
        }
    }
}
