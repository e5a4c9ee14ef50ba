//! Tests for the configuration system.

use scryer_rate_limit::{RateGate, RetryPolicy, ScryerConfig};
use std::time::Duration;

#[test]
fn test_load_bundled_defaults() {
    let config = ScryerConfig::load().unwrap();

    assert_eq!(config.http.base_url, "https://api.scryfall.com");
    assert!(config.http.user_agent.starts_with("scryer/"));
    assert_eq!(config.rate_limit.max_calls_per_window, 10);
    assert_eq!(config.rate_limit.window_ms, 1000);
    assert_eq!(config.rate_limit.cooldown_secs, 5);
    assert_eq!(config.retry.max_attempts, 3);
}

#[test]
fn test_defaults_match_bundled_file() {
    let config = ScryerConfig::load().unwrap();
    let defaults = ScryerConfig::default();

    assert_eq!(config.rate_limit, defaults.rate_limit);
    assert_eq!(config.retry, defaults.retry);
    assert_eq!(config.http.base_url, defaults.http.base_url);
}

#[test]
fn test_config_from_file() {
    use std::io::Write;
    use tempfile::Builder;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[http]
base_url = "http://localhost:9000"

[rate_limit]
max_calls_per_window = 2

[retry]
max_attempts = 5
backoff_step_ms = 500
"#
    )
    .unwrap();

    let config = ScryerConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.http.base_url, "http://localhost:9000");
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.rate_limit.max_calls_per_window, 2);
    assert_eq!(config.rate_limit.window_ms, 1000);
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.backoff_base_ms, 1000);

    let policy = RetryPolicy::from_config(&config.retry, config.rate_limit.cooldown_secs);
    assert_eq!(policy.max_attempts(), 5);
    assert_eq!(policy.backoff(2), Duration::from_millis(2000));

    let gate = RateGate::from_config(&config.rate_limit);
    assert_eq!(gate.max_calls(), 2);
    assert_eq!(gate.window(), Duration::from_secs(1));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = ScryerConfig::from_file("/definitely/not/here/scryer.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}
