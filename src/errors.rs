use thiserror::Error;

/// Missing or malformed environment configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {0}")]
    Missing(String),
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure reading the claimable-fragment count. Callers must treat this as
/// "count unknown", never as zero.
#[derive(Debug, Error)]
pub enum ChainReadError {
    #[error("claimable check request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed claimable result: {0}")]
    Malformed(String),
}

/// Failure submitting or confirming a claim transaction.
#[derive(Debug, Error)]
pub enum ChainWriteError {
    #[error("failed to submit claim transaction: {0}")]
    Submit(String),
    #[error("claim transaction reverted: {tx_hash}")]
    Reverted { tx_hash: String },
    #[error("claim confirmation failed: {0}")]
    Confirmation(String),
}

/// Failure talking to the Rivalz backend. Display-only data; never stops the
/// claim loop.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to sign login payload: {0}")]
    Sign(String),
}
