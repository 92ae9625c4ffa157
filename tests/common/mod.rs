//! Common test utilities: a scripted fake chain for driving claim cycles.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use rivalz_claim_bot::errors::{ChainReadError, ChainWriteError};
use rivalz_claim_bot::utils::chain_client::{ClaimChain, ClaimReceipt};

/// Scripted [`ClaimChain`] double. Reads return the current remaining count;
/// each successful submit decrements it. Failures are scripted per read
/// index or per submit call.
pub struct FakeChain {
    remaining: Mutex<u64>,
    reads: Mutex<u64>,
    claims: Mutex<u64>,
    failing_reads: Mutex<Vec<u64>>,
    submit_failures: Mutex<VecDeque<bool>>,
    submit_delay: Duration,
    pub read_times: Mutex<Vec<tokio::time::Instant>>,
}

#[allow(dead_code)] // Each test binary uses a different slice of this API
impl FakeChain {
    pub fn new(remaining: u64) -> Self {
        Self {
            remaining: Mutex::new(remaining),
            reads: Mutex::new(0),
            claims: Mutex::new(0),
            failing_reads: Mutex::new(Vec::new()),
            submit_failures: Mutex::new(VecDeque::new()),
            submit_delay: Duration::ZERO,
            read_times: Mutex::new(Vec::new()),
        }
    }

    /// A chain whose submits take `delay` of (simulated) time to confirm.
    pub fn with_submit_delay(remaining: u64, delay: Duration) -> Self {
        let mut chain = Self::new(remaining);
        chain.submit_delay = delay;
        chain
    }

    /// Makes the `read_no`-th read (1-based) fail.
    pub fn fail_read(&self, read_no: u64) {
        self.failing_reads.lock().unwrap().push(read_no);
    }

    /// Scripts the next submits: `true` entries fail, `false` entries
    /// succeed. Submits succeed once the script is consumed.
    pub fn script_submit_failures(&self, pattern: &[bool]) {
        let mut queue = self.submit_failures.lock().unwrap();
        for &fails in pattern {
            queue.push_back(fails);
        }
    }

    pub fn reads(&self) -> u64 {
        *self.reads.lock().unwrap()
    }

    pub fn claims(&self) -> u64 {
        *self.claims.lock().unwrap()
    }
}

#[async_trait]
impl ClaimChain for FakeChain {
    async fn claimable_fragments(&self) -> Result<u64, ChainReadError> {
        let read_no = {
            let mut reads = self.reads.lock().unwrap();
            *reads += 1;
            *reads
        };
        self.read_times
            .lock()
            .unwrap()
            .push(tokio::time::Instant::now());
        if self.failing_reads.lock().unwrap().contains(&read_no) {
            return Err(ChainReadError::Malformed(
                "scripted read failure".to_string(),
            ));
        }
        Ok(*self.remaining.lock().unwrap())
    }

    async fn submit_claim(&self) -> Result<ClaimReceipt, ChainWriteError> {
        if self.submit_delay > Duration::ZERO {
            tokio::time::sleep(self.submit_delay).await;
        }
        let failed = self
            .submit_failures
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(false);
        if failed {
            return Err(ChainWriteError::Submit(
                "scripted submit failure".to_string(),
            ));
        }
        let claim_no = {
            let mut remaining = self.remaining.lock().unwrap();
            *remaining = remaining.saturating_sub(1);
            let mut claims = self.claims.lock().unwrap();
            *claims += 1;
            *claims
        };
        Ok(ClaimReceipt {
            tx_hash: format!("0x{:064x}", claim_no),
            confirmed: true,
        })
    }
}
