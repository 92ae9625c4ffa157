//! Sign in with the wallet and print the orbit-db node record.

use anyhow::Result;
use rivalz_claim_bot::config::load_env;
use rivalz_claim_bot::utils::{ChainClient, RivalzClient};

#[tokio::main]
async fn main() -> Result<()> {
    let env = load_env()?;
    let chain = ChainClient::new(&env, &env.contract_address)?;
    let rivalz = RivalzClient::new(&env)?;

    let payload = chain.sign_login(&env.referral_id).await?;
    let token = rivalz.login_with_wallet(&payload).await?;
    println!("✅ Logged in with wallet\n");

    let info = rivalz.node_info(chain.wallet_address(), &token).await?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
