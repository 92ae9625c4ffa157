//! Environment loading and validation.

use rivalz_claim_bot::config::{is_valid_ethereum_address, load_env};
use rivalz_claim_bot::errors::ConfigError;
use std::env;
use std::sync::{Mutex, MutexGuard};

// Process environment is shared; serialize every test that touches it.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "PROVIDER_URL",
    "PRIVATE_KEY",
    "CONTRACT_ADDRESS",
    "CONTRACT_RIZ",
    "API_BASE_URL",
    "FRAGMENT_API_URL",
    "REFERRAL_ID",
    "CLAIM_INTERVAL_SECS",
    "CLAIM_RETRY_LIMIT",
    "CLAIM_RETRY_DELAY_MS",
    "REQUEST_TIMEOUT_MS",
    "MAX_CONSECUTIVE_FAILURES",
];

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

fn set_required() {
    env::set_var("PROVIDER_URL", "https://rpc.example.org");
    env::set_var(
        "PRIVATE_KEY",
        "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    );
    env::set_var(
        "CONTRACT_ADDRESS",
        "0x4444444444444444444444444444444444444444",
    );
    env::set_var(
        "CONTRACT_RIZ",
        "0x5555555555555555555555555555555555555555",
    );
}

#[test]
fn missing_required_variables_are_all_reported() {
    let _guard = lock_env();
    clear_env();

    let err = load_env().expect_err("load_env must fail with nothing set");
    match err {
        ConfigError::Missing(names) => {
            for name in ["PROVIDER_URL", "PRIVATE_KEY", "CONTRACT_ADDRESS", "CONTRACT_RIZ"] {
                assert!(names.contains(name), "{} not reported in {:?}", name, names);
            }
        }
        other => panic!("expected ConfigError::Missing, got {:?}", other),
    }
}

#[test]
fn defaults_are_applied() {
    let _guard = lock_env();
    clear_env();
    set_required();

    let cfg = load_env().expect("required-only env must load");
    assert_eq!(cfg.api_base_url, "https://be.rivalz.ai");
    assert_eq!(cfg.fragment_api_url, "https://api.rivalz.ai");
    assert_eq!(cfg.referral_id, "");
    assert_eq!(cfg.claim_interval_secs, 300);
    assert_eq!(cfg.claim_retry_limit, 3);
    assert_eq!(cfg.claim_retry_delay_ms, 1000);
    assert_eq!(cfg.request_timeout_ms, 10000);
    assert_eq!(cfg.max_consecutive_failures, 3);
}

#[test]
fn malformed_contract_address_is_rejected() {
    let _guard = lock_env();
    clear_env();
    set_required();
    env::set_var("CONTRACT_ADDRESS", "0x123");

    let err = load_env().expect_err("short address must be rejected");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "CONTRACT_ADDRESS",
            ..
        }
    ));
}

#[test]
fn malformed_provider_url_is_rejected() {
    let _guard = lock_env();
    clear_env();
    set_required();
    env::set_var("PROVIDER_URL", "ftp://rpc.example.org");

    let err = load_env().expect_err("non-http url must be rejected");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "PROVIDER_URL",
            ..
        }
    ));
}

#[test]
fn retry_limit_range_is_enforced() {
    let _guard = lock_env();
    clear_env();
    set_required();
    env::set_var("CLAIM_RETRY_LIMIT", "0");

    let err = load_env().expect_err("zero retry limit must be rejected");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "CLAIM_RETRY_LIMIT",
            ..
        }
    ));
}

#[test]
fn non_numeric_interval_is_rejected() {
    let _guard = lock_env();
    clear_env();
    set_required();
    env::set_var("CLAIM_INTERVAL_SECS", "five minutes");

    let err = load_env().expect_err("non-numeric interval must be rejected");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "CLAIM_INTERVAL_SECS",
            ..
        }
    ));
}

#[test]
fn reads_values_from_a_dotenv_file() {
    let _guard = lock_env();
    clear_env();

    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(
        temp_dir.path().join(".env"),
        concat!(
            "PROVIDER_URL=https://rpc.example.org\n",
            "PRIVATE_KEY=0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef\n",
            "CONTRACT_ADDRESS=0x4444444444444444444444444444444444444444\n",
            "CONTRACT_RIZ=0x5555555555555555555555555555555555555555\n",
            "CLAIM_INTERVAL_SECS=120\n",
        ),
    )
    .expect("write .env");

    let original_dir = env::current_dir().expect("cwd");
    env::set_current_dir(temp_dir.path()).expect("enter temp dir");
    let result = load_env();
    env::set_current_dir(original_dir).expect("restore cwd");

    let cfg = result.expect(".env-backed config must load");
    assert_eq!(cfg.claim_interval_secs, 120);
    assert_eq!(
        cfg.contract_address,
        "0x4444444444444444444444444444444444444444"
    );

    // dotenv exports into the process environment; clean up for other tests
    clear_env();
}

#[test]
fn address_format_checks() {
    assert!(is_valid_ethereum_address(
        "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"
    ));
    assert!(!is_valid_ethereum_address(
        "742d35Cc6634C0532925a3b844Bc9e7595f0bEb0"
    ));
    assert!(!is_valid_ethereum_address("0x742d35"));
    assert!(!is_valid_ethereum_address(
        "0xZZZd35Cc6634C0532925a3b844Bc9e7595f0bEb0"
    ));
}
