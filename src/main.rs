use anyhow::Result;
use std::sync::Arc;
use tokio::signal;

use rivalz_claim_bot::config::load_env;
use rivalz_claim_bot::services::start_claim_service;
use rivalz_claim_bot::utils::{ChainClient, Logger, RivalzClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let env = Arc::new(load_env()?);

    let chain = ChainClient::new(&env, &env.contract_address)?;
    let rivalz = RivalzClient::new(&env)?;

    Logger::startup(
        chain.wallet_address(),
        &env.contract_address,
        &env.riz_contract_address,
        env.claim_interval_secs,
    );

    Logger::info("Starting claim service...");
    let service_handle = {
        let env = env.clone();
        tokio::spawn(async move { start_claim_service(env, chain, rivalz).await })
    };

    tokio::select! {
        result = service_handle => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    Logger::error(&format!("Claim service stopped: {}", e));
                    std::process::exit(1);
                }
                Err(e) => {
                    Logger::error(&format!("Claim service panicked: {}", e));
                    std::process::exit(1);
                }
            }
        }
        signal_result = signal::ctrl_c() => {
            if let Err(err) = signal_result {
                eprintln!("Unable to listen for shutdown signal: {}", err);
            }
            Logger::separator();
            Logger::info("Received SIGINT, shutting down...");
        }
    }

    Logger::success("Shutdown complete");
    Ok(())
}
