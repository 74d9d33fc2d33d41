pub mod bc_client;
pub mod shutdown;
pub mod solana_client;
