//! One-shot check of the claimable fragment count and score.

use anyhow::Result;
use rivalz_claim_bot::config::load_env;
use rivalz_claim_bot::utils::chain_client::ClaimChain;
use rivalz_claim_bot::utils::{ChainClient, Logger, RivalzClient};

#[tokio::main]
async fn main() -> Result<()> {
    let env = load_env()?;
    let chain = ChainClient::new(&env, &env.contract_address)?;
    let rivalz = RivalzClient::new(&env)?;

    println!(
        "🔍 Checking claimable fragments for {}\n",
        Logger::format_address(chain.wallet_address())
    );

    let count = chain.claimable_fragments().await?;
    println!("  Claimable fragments: {}", count);

    match rivalz.fragment_collection(chain.wallet_address()).await {
        Ok(collection) => println!("  Intel discount:      {}", collection.intel_discount),
        Err(e) => eprintln!("  ⚠️  Could not fetch fragment score: {}", e),
    }

    Ok(())
}
