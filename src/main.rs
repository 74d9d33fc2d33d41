use anyhow::Result;
use blocklens_api::application::app::App;
use blocklens_api::config::BlockLensArgs;
use blocklens_api::infrastructure::shutdown::ShutdownChannel;
use blocklens_api::service;
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = BlockLensArgs::parse();

    // Create a shutdown channel
    let (shutdown_sender, _) = broadcast::channel(1);

    let app = Arc::new(App::from_url(
        &args.rpc_url,
        args.num_retries,
        args.max_fee_samples,
    ));

    // Start the API server
    let mut server_handle = tokio::spawn(service::api::start_server(
        ShutdownChannel::new(shutdown_sender.clone()),
        app,
        args.listen_port,
    ));

    // Wait for shutdown signal
    let server_result = tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::warn!("Received Ctrl+C, shutting down...");
            // No receiver left means the server already stopped.
            let _ = shutdown_sender.send(());
            server_handle.await
        }
        result = &mut server_handle => {
            tracing::warn!("API server stopped unexpectedly");
            result
        }
    };

    match server_result {
        Ok(Err(e)) => {
            tracing::error!("API server error: {:?}", e);
            return Err(e);
        }
        Err(e) => {
            tracing::error!("API server task failed: {:?}", e);
            return Err(e.into());
        }
        Ok(Ok(())) => {}
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
