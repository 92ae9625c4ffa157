//! Run a single claim cycle immediately, without the scheduler.

use anyhow::Result;
use rivalz_claim_bot::config::load_env;
use rivalz_claim_bot::services::claim_loop::{run_cycle, CycleOutcome, RetryPolicy};
use rivalz_claim_bot::utils::ChainClient;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Running a single claim cycle...\n");

    let env = load_env()?;
    let chain = ChainClient::new(&env, &env.contract_address)?;

    let report = run_cycle(&chain, &RetryPolicy::from_env(&env)).await;
    println!("\n{} fragment(s) claimed", report.claimed);

    match report.outcome {
        CycleOutcome::Drained => {
            println!("✅ All claimable fragments drained");
            Ok(())
        }
        outcome => {
            eprintln!("❌ Cycle ended early: {:?}", outcome);
            std::process::exit(1);
        }
    }
}
