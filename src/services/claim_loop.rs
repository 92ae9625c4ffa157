use std::time::Duration;

use crate::config::Env;
use crate::errors::ChainReadError;
use crate::utils::chain_client::ClaimChain;
use crate::utils::logger::Logger;

// Cap on the backoff doubling, so the delay never exceeds base * 32.
const MAX_BACKOFF_SHIFT: u32 = 5;

/// Bounded retry for claim submissions within one cycle, configured via
/// CLAIM_RETRY_LIMIT / CLAIM_RETRY_DELAY_MS.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn from_env(env: &Env) -> Self {
        Self {
            max_attempts: env.claim_retry_limit,
            base_delay: Duration::from_millis(env.claim_retry_delay_ms),
        }
    }

    fn delay_for(&self, failed_attempts: u32) -> Duration {
        self.base_delay * (1 << (failed_attempts - 1).min(MAX_BACKOFF_SHIFT))
    }
}

/// Terminal state of one claim cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Claimable count reached zero.
    Drained,
    /// The first read of the cycle failed; nothing was submitted.
    Aborted(ChainReadError),
    /// A re-read failed mid-cycle. Ends the loop like `Drained` but is
    /// reported distinctly.
    ReadFailed(ChainReadError),
    /// Consecutive claim failures hit the retry limit.
    RetriesExhausted,
}

#[derive(Debug)]
pub struct CycleReport {
    pub claimed: u64,
    pub outcome: CycleOutcome,
}

/// One full cycle: poll the claimable count, submit claims until it reaches
/// zero. Every submission is preceded by a fresh read, and a failed
/// submission never increments the claimed counter.
pub async fn run_cycle<C: ClaimChain>(chain: &C, policy: &RetryPolicy) -> CycleReport {
    let mut claimed: u64 = 0;
    let mut failed_attempts: u32 = 0;
    let mut first_read = true;

    loop {
        let count = match chain.claimable_fragments().await {
            Ok(count) => count,
            Err(e) if first_read => {
                Logger::error(&format!("Unable to read claimable fragments: {}", e));
                return CycleReport {
                    claimed,
                    outcome: CycleOutcome::Aborted(e),
                };
            }
            Err(e) => {
                Logger::warning(&format!("Claimable re-read failed, ending cycle: {}", e));
                return CycleReport {
                    claimed,
                    outcome: CycleOutcome::ReadFailed(e),
                };
            }
        };

        if first_read {
            Logger::info(&format!("Claimable fragments: {}", count));
            first_read = false;
        }

        if count == 0 {
            return CycleReport {
                claimed,
                outcome: CycleOutcome::Drained,
            };
        }

        match chain.submit_claim().await {
            Ok(receipt) => {
                claimed += 1;
                failed_attempts = 0;
                Logger::success(&format!(
                    "Claim confirmed: {} (total claimed: {})",
                    receipt.tx_hash, claimed
                ));
            }
            Err(e) => {
                failed_attempts += 1;
                if failed_attempts >= policy.max_attempts {
                    Logger::error(&format!(
                        "Claim failed ({}/{}), giving up this cycle: {}",
                        failed_attempts, policy.max_attempts, e
                    ));
                    return CycleReport {
                        claimed,
                        outcome: CycleOutcome::RetriesExhausted,
                    };
                }
                let delay = policy.delay_for(failed_attempts);
                Logger::warning(&format!(
                    "Claim failed ({}/{}), retrying in {:?}: {}",
                    failed_attempts, policy.max_attempts, delay, e
                ));
                tokio::time::sleep(delay).await;
            }
        }
    }
}
