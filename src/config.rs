use clap::Parser;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = "BlockLens wallet and fee API backed by a Solana RPC node"
)]
pub struct BlockLensArgs {
    /// RPC endpoint
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Number of retries for each RPC call
    #[arg(short, long, env = "NUM_RETRIES", default_value_t = 0)]
    pub num_retries: usize,

    /// Listen port REST API
    #[arg(short, long, env = "LISTEN_PORT", default_value_t = 3000)]
    pub listen_port: u16,

    /// Maximum number of recent slots used for fee statistics
    #[arg(short, long, env = "MAX_FEE_SAMPLES", default_value_t = 150)]
    pub max_fee_samples: usize,
}
