use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::domain::models::{
    BalanceChanges, SignatureRecord, TransactionCategory, TransactionSummary,
};

/// Balance movements at or below this many SOL are not classified as transfers.
pub const DUST_THRESHOLD_SOL: f64 = 0.0001;

pub const DEFAULT_LIMIT: usize = 20;
/// Largest page `getSignaturesForAddress` serves.
pub const MAX_LIMIT: usize = 1_000;

/// Pre-balance minus post-balance of the first account, in SOL.
fn first_account_delta(changes: &BalanceChanges) -> f64 {
    let pre = changes.pre_balances.first().copied().unwrap_or_default() as i128;
    let post = changes.post_balances.first().copied().unwrap_or_default() as i128;
    (pre - post) as f64 / LAMPORTS_PER_SOL as f64
}

pub fn classify(delta: f64, changes: &BalanceChanges) -> TransactionCategory {
    if changes.post_token_balances > 0 {
        return TransactionCategory::Swap;
    }
    if delta.abs() > DUST_THRESHOLD_SOL {
        if delta < 0.0 {
            TransactionCategory::Sent
        } else {
            TransactionCategory::Received
        }
    } else {
        TransactionCategory::Other
    }
}

/// Combines the signature record with the transaction's balance metadata, if any.
pub fn summarize(record: &SignatureRecord, changes: Option<&BalanceChanges>) -> TransactionSummary {
    let mut summary = TransactionSummary::from_record(record);
    if let Some(changes) = changes {
        let delta = first_account_delta(changes);
        summary.amount = delta.abs();
        summary.category = classify(delta, changes);
    }
    summary
}
