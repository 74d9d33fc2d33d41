use crate::domain::models::{
    FeeEstimate, FeeEstimates, FeeReport, FeeSample, PrioritizationFeeStats,
};

/// Signature fee charged for every transaction.
pub const BASE_FEE_LAMPORTS: u64 = 5_000;

pub const TOKEN_TRANSFER_SURCHARGE: u64 = 5_000;
pub const SWAP_SURCHARGE: u64 = 10_000;
pub const NFT_TRANSFER_SURCHARGE: u64 = 5_000;
pub const SMART_CONTRACT_SURCHARGE: u64 = 15_000;

/// Keeps the `max_samples` samples from the most recent slots.
pub fn most_recent(mut samples: Vec<FeeSample>, max_samples: usize) -> Vec<FeeSample> {
    if samples.len() > max_samples {
        samples.sort_unstable_by(|a, b| b.slot.cmp(&a.slot));
        samples.truncate(max_samples);
    }
    samples
}

impl PrioritizationFeeStats {
    /// Summarizes the non-zero fees among `samples`. An empty set yields all zeros.
    pub fn from_samples(samples: &[FeeSample]) -> Self {
        let mut fees: Vec<u64> = samples.iter().map(|s| s.fee).filter(|&f| f > 0).collect();
        if fees.is_empty() {
            return Self::default();
        }
        fees.sort_unstable();

        let sum: u128 = fees.iter().map(|&f| f as u128).sum();
        Self {
            average: sum as f64 / fees.len() as f64,
            median: fees[fees.len() / 2],
            min: fees[0],
            max: fees[fees.len() - 1],
        }
    }
}

impl FeeEstimates {
    /// Adds the per-kind surcharges to the base fee. Swaps and program calls
    /// also pay the average prioritization fee, rounded down.
    pub fn from_stats(stats: &PrioritizationFeeStats) -> Self {
        let priority = stats.average.floor() as u64;
        Self {
            simple_transfer: FeeEstimate::from_lamports(BASE_FEE_LAMPORTS),
            token_transfer: FeeEstimate::from_lamports(BASE_FEE_LAMPORTS + TOKEN_TRANSFER_SURCHARGE),
            swap: FeeEstimate::from_lamports(BASE_FEE_LAMPORTS + SWAP_SURCHARGE + priority),
            nft_transfer: FeeEstimate::from_lamports(BASE_FEE_LAMPORTS + NFT_TRANSFER_SURCHARGE),
            smart_contract: FeeEstimate::from_lamports(
                BASE_FEE_LAMPORTS + SMART_CONTRACT_SURCHARGE + priority,
            ),
        }
    }
}

impl FeeReport {
    pub fn from_samples(samples: &[FeeSample]) -> Self {
        let prioritization_fees = PrioritizationFeeStats::from_samples(samples);
        Self {
            base_fee: FeeEstimate::from_lamports(BASE_FEE_LAMPORTS),
            estimates: FeeEstimates::from_stats(&prioritization_fees),
            prioritization_fees,
        }
    }
}
