use serde::{Deserialize, Serialize};

/// Body of `POST /api-v1/auth/login-with-wallet`. The signature covers
/// `data_sign`, a one-time message salted with the current timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub address: String,
    pub signature: String,
    pub data_sign: String,
    pub referral_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
}

/// Flat fragment-collection record from
/// `GET /fragment/v1/fragment/collection/{address}`. Only `intelDiscount` is
/// read directly; the remaining fragment fields ride along untyped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentCollection {
    pub intel_discount: f64,
    #[serde(flatten)]
    pub fragments: serde_json::Map<String, serde_json::Value>,
}
