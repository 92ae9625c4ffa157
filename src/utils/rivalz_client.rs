use std::time::Duration;

use crate::config::Env;
use crate::errors::RemoteError;
use crate::interfaces::{FragmentCollection, LoginPayload, LoginResponse};

/// HTTP client for the Rivalz backend: login, fragment score, node info.
/// Fire-and-forget with no retry; every failure surfaces as a
/// [`RemoteError`] and the claim loop treats it as display-only noise.
pub struct RivalzClient {
    http: reqwest::Client,
    api_base: String,
    fragment_base: String,
}

impl RivalzClient {
    pub fn new(env: &Env) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(env.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            api_base: env.api_base_url.trim_end_matches('/').to_string(),
            fragment_base: env.fragment_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchanges a signed login payload for an access token.
    pub async fn login_with_wallet(&self, payload: &LoginPayload) -> Result<String, RemoteError> {
        let url = format!("{}/api-v1/auth/login-with-wallet", self.api_base);
        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .header("authorization", "Bearer null")
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.data.access_token)
    }

    /// Fetches the fragment collection for a wallet. Display-only.
    pub async fn fragment_collection(
        &self,
        address: &str,
    ) -> Result<FragmentCollection, RemoteError> {
        let url = format!(
            "{}/fragment/v1/fragment/collection/{}",
            self.fragment_base, address
        );
        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Bearer-authenticated orbit-db lookup. Not part of the claim flow;
    /// surfaced through the `node_info` binary.
    pub async fn node_info(
        &self,
        address: &str,
        token: &str,
    ) -> Result<serde_json::Value, RemoteError> {
        let url = format!(
            "{}/api-v1/orbit-db/find-by-wallet-address/{}",
            self.api_base, address
        );
        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .header("authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
