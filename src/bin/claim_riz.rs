//! Submit one claim against the secondary Riz contract.

use anyhow::Result;
use rivalz_claim_bot::config::load_env;
use rivalz_claim_bot::utils::chain_client::ClaimChain;
use rivalz_claim_bot::utils::{ChainClient, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let env = load_env()?;
    let chain = ChainClient::new(&env, &env.riz_contract_address)?;

    println!(
        "🚀 Claiming Riz for {} on {}\n",
        Logger::format_address(chain.wallet_address()),
        Logger::format_address(&env.riz_contract_address)
    );

    match chain.submit_claim().await {
        Ok(receipt) => {
            println!("✅ Riz claim confirmed: {}", receipt.tx_hash);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Riz claim failed: {}", e);
            std::process::exit(1);
        }
    }
}
