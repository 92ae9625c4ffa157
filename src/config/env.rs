use regex::Regex;
use std::env;

use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct Env {
    pub provider_url: String,
    pub private_key: String,
    pub contract_address: String,
    pub riz_contract_address: String,
    pub api_base_url: String,
    pub fragment_api_url: String,
    pub referral_id: String,
    pub claim_interval_secs: u64,
    pub claim_retry_limit: u32,
    pub claim_retry_delay_ms: u64,
    pub request_timeout_ms: u64,
    pub max_consecutive_failures: u32,
}

pub fn is_valid_ethereum_address(address: &str) -> bool {
    let re = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
    re.is_match(address)
}

fn validate_required_env() -> Result<(), ConfigError> {
    let required = vec!["PROVIDER_URL", "PRIVATE_KEY", "CONTRACT_ADDRESS", "CONTRACT_RIZ"];

    let mut missing = Vec::new();
    for key in &required {
        if env::var(key).is_err() {
            missing.push(*key);
        }
    }

    if !missing.is_empty() {
        eprintln!("\n❌ Configuration Error: Missing required environment variables\n");
        eprintln!("Missing variables: {}\n", missing.join(", "));
        eprintln!("🔧 Quick fix:");
        eprintln!("   Copy .env.example to .env and fill in the missing values\n");
        return Err(ConfigError::Missing(missing.join(", ")));
    }

    Ok(())
}

fn validate_address(name: &'static str) -> Result<(), ConfigError> {
    if let Ok(address) = env::var(name) {
        if !is_valid_ethereum_address(&address) {
            eprintln!("\n❌ Invalid {}\n", name);
            eprintln!("Current value:   {}", address);
            eprintln!("Expected format: 0x followed by 40 hexadecimal characters\n");
            return Err(ConfigError::Invalid {
                name,
                reason: format!("not an Ethereum address: {}", address),
            });
        }
    }
    Ok(())
}

fn validate_url(name: &'static str) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(name) {
        if !value.starts_with("http") {
            eprintln!("\n❌ Invalid {}\n", name);
            eprintln!("Current value: {}", value);
            eprintln!("Must start with: http:// or https://\n");
            return Err(ConfigError::Invalid {
                name,
                reason: "must be a valid HTTP/HTTPS URL".to_string(),
            });
        }
    }
    Ok(())
}

fn parse_u64(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("expected an integer, got {:?}", raw),
        }),
    }
}

fn parse_u32(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("expected an integer, got {:?}", raw),
        }),
    }
}

fn validate_numeric_config(env: &Env) -> Result<(), ConfigError> {
    if env.claim_interval_secs == 0 {
        return Err(ConfigError::Invalid {
            name: "CLAIM_INTERVAL_SECS",
            reason: "must be positive".to_string(),
        });
    }

    if env.claim_retry_limit < 1 || env.claim_retry_limit > 10 {
        return Err(ConfigError::Invalid {
            name: "CLAIM_RETRY_LIMIT",
            reason: "must be between 1 and 10".to_string(),
        });
    }

    if env.request_timeout_ms < 1000 {
        return Err(ConfigError::Invalid {
            name: "REQUEST_TIMEOUT_MS",
            reason: "must be at least 1000ms".to_string(),
        });
    }

    if env.max_consecutive_failures < 1 {
        return Err(ConfigError::Invalid {
            name: "MAX_CONSECUTIVE_FAILURES",
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}

pub fn load_env() -> Result<Env, ConfigError> {
    dotenvy::dotenv().ok(); // Load .env file if it exists

    validate_required_env()?;
    validate_address("CONTRACT_ADDRESS")?;
    validate_address("CONTRACT_RIZ")?;
    validate_url("PROVIDER_URL")?;
    validate_url("API_BASE_URL")?;
    validate_url("FRAGMENT_API_URL")?;

    let env = Env {
        provider_url: env::var("PROVIDER_URL")
            .map_err(|_| ConfigError::Missing("PROVIDER_URL".to_string()))?,
        private_key: env::var("PRIVATE_KEY")
            .map_err(|_| ConfigError::Missing("PRIVATE_KEY".to_string()))?,
        contract_address: env::var("CONTRACT_ADDRESS")
            .map_err(|_| ConfigError::Missing("CONTRACT_ADDRESS".to_string()))?,
        riz_contract_address: env::var("CONTRACT_RIZ")
            .map_err(|_| ConfigError::Missing("CONTRACT_RIZ".to_string()))?,
        api_base_url: env::var("API_BASE_URL")
            .unwrap_or_else(|_| "https://be.rivalz.ai".to_string()),
        fragment_api_url: env::var("FRAGMENT_API_URL")
            .unwrap_or_else(|_| "https://api.rivalz.ai".to_string()),
        referral_id: env::var("REFERRAL_ID").unwrap_or_default(),
        claim_interval_secs: parse_u64("CLAIM_INTERVAL_SECS", 300)?,
        claim_retry_limit: parse_u32("CLAIM_RETRY_LIMIT", 3)?,
        claim_retry_delay_ms: parse_u64("CLAIM_RETRY_DELAY_MS", 1000)?,
        request_timeout_ms: parse_u64("REQUEST_TIMEOUT_MS", 10000)?,
        max_consecutive_failures: parse_u32("MAX_CONSECUTIVE_FAILURES", 3)?,
    };

    validate_numeric_config(&env)?;

    Ok(env)
}
