use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use async_trait::async_trait;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Env;
use crate::errors::{ChainReadError, ChainWriteError, ConfigError, RemoteError};
use crate::interfaces::LoginPayload;
use crate::utils::logger::Logger;

/// Selector of the claimable-fragments view: takes a 32-byte-padded wallet
/// address, returns the remaining claim count.
pub const CLAIMABLE_SELECTOR: &str = "0x89885049";

/// claim(), no arguments, no outputs, nonpayable.
const CLAIM_CALLDATA: [u8; 4] = [0x4e, 0x71, 0xd9, 0x2d];

/// The claimable view is gated on the caller; reads must be issued from this
/// address.
const READ_CALLER: &str = "0x24edfad36015420a84573684644f6dc74f0ba8c5";

/// Result of a confirmed claim transaction.
#[derive(Debug, Clone)]
pub struct ClaimReceipt {
    pub tx_hash: String,
    pub confirmed: bool,
}

/// The chain operations the claim loop needs. Implemented by [`ChainClient`]
/// for a live node and by scripted fakes in tests.
#[async_trait]
pub trait ClaimChain: Send + Sync {
    /// Reads the claimable-fragment count for the configured wallet. A
    /// failure means "count unknown"; callers must not treat it as zero.
    async fn claimable_fragments(&self) -> Result<u64, ChainReadError>;

    /// Submits one signed claim transaction and blocks until the node
    /// confirms it. Spends gas and decrements the on-chain count exactly once
    /// per successful call; must not be called concurrently for one wallet,
    /// since nonce assignment is sequential.
    async fn submit_claim(&self) -> Result<ClaimReceipt, ChainWriteError>;
}

pub fn encode_claimable_call(wallet: &str) -> String {
    let trimmed = wallet.trim().trim_start_matches("0x").to_lowercase();
    format!("{}{:0>64}", CLAIMABLE_SELECTOR, trimmed)
}

pub fn decode_claimable_result(raw: &str) -> Result<u64, ChainReadError> {
    let hex = raw.trim_start_matches("0x");
    if hex.is_empty() {
        return Err(ChainReadError::Malformed("empty call result".to_string()));
    }
    let value = U256::from_str_radix(hex, 16)
        .map_err(|e| ChainReadError::Malformed(format!("{}: {:?}", e, raw)))?;
    u64::try_from(value)
        .map_err(|_| ChainReadError::Malformed(format!("count out of range: {:?}", raw)))
}

/// Read/write connection to the claim contract, bound to one wallet and one
/// contract address. Reads go over raw JSON-RPC; writes go through an
/// alloy provider with the wallet attached.
pub struct ChainClient {
    http: reqwest::Client,
    rpc_url: String,
    contract: String,
    signer: PrivateKeySigner,
    wallet: String,
    request_timeout: Duration,
}

impl ChainClient {
    pub fn new(env: &Env, contract: &str) -> Result<Self, ConfigError> {
        let private_key = if env.private_key.starts_with("0x") {
            env.private_key.clone()
        } else {
            format!("0x{}", env.private_key)
        };
        let signer =
            PrivateKeySigner::from_str(&private_key).map_err(|e| ConfigError::Invalid {
                name: "PRIVATE_KEY",
                reason: e.to_string(),
            })?;
        let wallet = format!("0x{:x}", signer.address());

        Ok(Self {
            http: reqwest::Client::new(),
            rpc_url: env.provider_url.clone(),
            contract: contract.to_string(),
            signer,
            wallet,
            request_timeout: Duration::from_millis(env.request_timeout_ms),
        })
    }

    pub fn wallet_address(&self) -> &str {
        &self.wallet
    }

    /// Builds the login payload: signs a one-time message salted with the
    /// current timestamp, the same shape the backend verifies.
    pub async fn sign_login(&self, referral_id: &str) -> Result<LoginPayload, RemoteError> {
        let data_sign = format!(
            "Sign in to Rivalz with OTP: {}",
            chrono::Utc::now().timestamp_millis()
        );
        let signature = self
            .signer
            .sign_message(data_sign.as_bytes())
            .await
            .map_err(|e| RemoteError::Sign(e.to_string()))?;

        Ok(LoginPayload {
            address: self.wallet.clone(),
            signature: format!("0x{}", hex::encode(signature.as_bytes())),
            data_sign,
            referral_id: referral_id.to_string(),
        })
    }
}

#[async_trait]
impl ClaimChain for ChainClient {
    async fn claimable_fragments(&self) -> Result<u64, ChainReadError> {
        let data = encode_claimable_call(&self.wallet);
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [{
                "from": READ_CALLER,
                "to": self.contract,
                "data": data
            }, "latest"],
            "id": 1
        });

        let response: serde_json::Value = self
            .http
            .post(&self.rpc_url)
            .json(&payload)
            .timeout(self.request_timeout)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.get("error") {
            return Err(ChainReadError::Rpc {
                code: error.get("code").and_then(|c| c.as_i64()).unwrap_or(0),
                message: error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown rpc error")
                    .to_string(),
            });
        }

        let result = response
            .get("result")
            .and_then(|r| r.as_str())
            .ok_or_else(|| ChainReadError::Malformed("no result in RPC response".to_string()))?;

        decode_claimable_result(result)
    }

    async fn submit_claim(&self) -> Result<ClaimReceipt, ChainWriteError> {
        let to_addr = self
            .contract
            .parse::<Address>()
            .map_err(|e| ChainWriteError::Submit(format!("invalid contract address: {}", e)))?;
        let tx = TransactionRequest::default()
            .with_to(to_addr)
            .with_input(Bytes::from(CLAIM_CALLDATA.to_vec()));

        let url: url::Url = self
            .rpc_url
            .parse()
            .map_err(|e| ChainWriteError::Submit(format!("invalid provider url: {}", e)))?;
        let provider = ProviderBuilder::new()
            .wallet(self.signer.clone())
            .connect_http(url);

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| ChainWriteError::Submit(e.to_string()))?;
        let tx_hash = format!("0x{:x}", *pending.tx_hash());
        Logger::info(&format!("Claim transaction sent: {}", tx_hash));

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChainWriteError::Confirmation(e.to_string()))?;
        if !receipt.status() {
            return Err(ChainWriteError::Reverted { tx_hash });
        }

        Ok(ClaimReceipt {
            tx_hash,
            confirmed: true,
        })
    }
}
