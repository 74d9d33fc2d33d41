use crate::domain::errors::ApplicationError;
use crate::domain::models::{FeeReport, TransactionSummary};

pub mod app;
pub mod fees;
pub mod transactions;

/// The `Application` trait defines the operations the HTTP layer exposes.
///
/// Every call is stateless: it queries the RPC node afresh and reshapes the
/// answer. Failures of individual sub-lookups are recovered inside the
/// implementation; only failures that make the whole request meaningless are
/// returned as an `ApplicationError`.
///
/// # Examples
///
/// ```no_run
/// use blocklens_api::application::{app::App, Application};
///
/// # async fn run() -> Result<(), blocklens_api::domain::errors::ApplicationError> {
/// let app = App::from_url("https://api.devnet.solana.com", 0, 150);
/// let report = app.estimate_fees().await?;
/// println!("swap costs {} SOL", report.estimates.swap.sol);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait Application {
    /// Builds fee estimates from the prioritization fees of recent slots.
    async fn estimate_fees(&self) -> Result<FeeReport, ApplicationError>;

    /// Lists the most recent transactions of `address`, newest first.
    ///
    /// # Errors
    ///
    /// `ApplicationError::InvalidAddress` when `address` is not a public key,
    /// `ApplicationError::BcClient` when the signature list cannot be fetched.
    async fn get_wallet_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>, ApplicationError>;
}
