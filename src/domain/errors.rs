use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcClientError {
    #[error("Failed to get recent prioritization fees: {0}")]
    FailedToGetPrioritizationFees(String),
    #[error("Failed to get signatures for address {0}: {1}")]
    FailedToGetSignatures(String, String),
    #[error("Failed to get transaction {0}: {1}")]
    FailedToGetTransaction(String, String),
    #[error("Invalid transaction signature {0}")]
    InvalidSignature(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid Solana address")]
    InvalidAddress(String),
    #[error(transparent)]
    BcClient(#[from] BcClientError),
}
