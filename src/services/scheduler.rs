use anyhow::Result;
use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::config::Env;
use crate::services::claim_loop::{run_cycle, CycleOutcome, CycleReport, RetryPolicy};
use crate::utils::chain_client::{ChainClient, ClaimChain};
use crate::utils::logger::Logger;
use crate::utils::rivalz_client::RivalzClient;

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub cycle_interval: Duration,
    pub retry_policy: RetryPolicy,
    pub max_consecutive_failures: u32,
}

impl SchedulerConfig {
    pub fn from_env(env: &Env) -> Self {
        Self {
            cycle_interval: Duration::from_secs(env.claim_interval_secs),
            retry_policy: RetryPolicy::from_env(env),
            max_consecutive_failures: env.max_consecutive_failures,
        }
    }
}

/// Why the scheduler stopped. It otherwise loops for the process lifetime.
#[derive(Debug)]
pub enum SchedulerExit {
    /// Too many consecutive cycles could not read the claimable count.
    PollsExhausted,
}

/// Entry point used by the main binary: sign in once, then drive claim
/// cycles forever. Returns only on the escalation path.
pub async fn start_claim_service(
    env: Arc<Env>,
    chain: ChainClient,
    rivalz: RivalzClient,
) -> Result<()> {
    // Login is for endpoints outside the claim flow; a failure here must
    // never keep the bot from claiming.
    match chain.sign_login(&env.referral_id).await {
        Ok(payload) => match rivalz.login_with_wallet(&payload).await {
            Ok(_token) => Logger::success("Logged in with wallet"),
            Err(e) => Logger::warning(&format!("Login failed, continuing without it: {}", e)),
        },
        Err(e) => Logger::warning(&format!("Could not sign login payload: {}", e)),
    }

    let cfg = SchedulerConfig::from_env(&env);
    let wallet = chain.wallet_address().to_string();
    let SchedulerExit::PollsExhausted = run_scheduler(&chain, &wallet, Some(&rivalz), &cfg).await;
    anyhow::bail!("claim scheduler stopped: claimable count unreadable")
}

/// Explicit cycle loop: run one claim cycle to a terminal state, count down
/// the configured delay, repeat. Never re-enters a cycle concurrently.
pub async fn run_scheduler<C: ClaimChain>(
    chain: &C,
    wallet: &str,
    rivalz: Option<&RivalzClient>,
    cfg: &SchedulerConfig,
) -> SchedulerExit {
    let mut consecutive_aborts: u32 = 0;
    let mut cycle: u64 = 0;

    loop {
        cycle += 1;
        Logger::header(&format!("Claim cycle #{}", cycle));

        if let Some(rivalz) = rivalz {
            show_score(rivalz, wallet).await;
        }

        let report = run_cycle(chain, &cfg.retry_policy).await;
        log_cycle(&report);

        if matches!(report.outcome, CycleOutcome::Aborted(_)) {
            consecutive_aborts += 1;
            if consecutive_aborts >= cfg.max_consecutive_failures {
                Logger::error(&format!(
                    "{} consecutive cycle(s) could not read the claimable count, stopping",
                    consecutive_aborts
                ));
                return SchedulerExit::PollsExhausted;
            }
        } else {
            consecutive_aborts = 0;
        }

        countdown(cfg.cycle_interval).await;
    }
}

async fn show_score(rivalz: &RivalzClient, wallet: &str) {
    match rivalz.fragment_collection(wallet).await {
        Ok(collection) => {
            Logger::info(&format!("Wallet address: {}", wallet));
            Logger::info(&format!("Intel discount: {}", collection.intel_discount));
        }
        Err(e) => Logger::warning(&format!("Could not fetch fragment score: {}", e)),
    }
}

fn log_cycle(report: &CycleReport) {
    match &report.outcome {
        CycleOutcome::Drained => Logger::success(&format!(
            "Cycle drained, {} fragment(s) claimed",
            report.claimed
        )),
        CycleOutcome::RetriesExhausted => Logger::warning(&format!(
            "Cycle gave up after repeated claim failures, {} fragment(s) claimed",
            report.claimed
        )),
        CycleOutcome::ReadFailed(e) => Logger::warning(&format!(
            "Cycle ended on a failed re-read ({}), {} fragment(s) claimed",
            e, report.claimed
        )),
        CycleOutcome::Aborted(e) => {
            Logger::error(&format!("Cycle aborted before any claim: {}", e))
        }
    }
}

/// Renders the remaining wait once per second, then returns after exactly
/// `total`.
async fn countdown(total: Duration) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.tick().await; // first tick completes immediately

    let mut remaining = total.as_secs();
    while remaining > 0 {
        Logger::countdown(remaining);
        ticker.tick().await;
        remaining -= 1;
    }
    Logger::clear_line();
}
