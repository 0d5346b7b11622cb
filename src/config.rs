use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::api::bank::BankClient;
use crate::pager::{PagingMode, PagingPolicy, ScrollTrigger};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_VIEWPORT_ROWS: u16 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub session_id: Option<String>,
    pub request_timeout: Duration,
    pub viewport_rows: u16,
    pub hyperlinks: bool,
    pub policy: PagingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode: PagingMode = parse_or(get("BANK_PAGING_MODE"), "BANK_PAGING_MODE", PagingMode::Hardened)?;
        let mut policy = mode.policy();
        if let Some(raw) = get("BANK_SCROLL_TRIGGER") {
            let trigger = parse::<ScrollTrigger>(&raw, "BANK_SCROLL_TRIGGER")?;
            policy = policy.with_scroll_trigger(trigger);
        }

        let timeout_secs: u64 = parse_or(get("BANK_TIMEOUT_SECS"), "BANK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "BANK_TIMEOUT_SECS",
                reason: "must be at least 1".to_string(),
            });
        }

        let viewport_rows: u16 = parse_or(get("BANK_VIEWPORT_ROWS"), "BANK_VIEWPORT_ROWS", DEFAULT_VIEWPORT_ROWS)?;
        if viewport_rows == 0 {
            return Err(ConfigError::Invalid {
                key: "BANK_VIEWPORT_ROWS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Config {
            base_url: get("BANK_BASE_URL").unwrap_or_else(|| BankClient::DEFAULT_BASE_URL.to_string()),
            session_id: get("BANK_SESSION_ID"),
            request_timeout: Duration::from_secs(timeout_secs),
            viewport_rows,
            hyperlinks: parse_or(get("BANK_HYPERLINKS"), "BANK_HYPERLINKS", true)?,
            policy,
        })
    }
}

fn parse<T>(raw: &str, key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw {
        Some(raw) => parse(&raw, key),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.session_id, None);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.viewport_rows, 20);
        assert!(config.hyperlinks);
        assert_eq!(config.policy, PagingPolicy::hardened());
    }

    #[test]
    fn test_compatible_mode_with_trigger_override() {
        let config = config(&[
            ("BANK_PAGING_MODE", "compatible"),
            ("BANK_SCROLL_TRIGGER", "threshold"),
            ("BANK_SESSION_ID", "s3ss10n"),
            ("BANK_HYPERLINKS", "false"),
        ])
        .unwrap();
        assert!(!config.policy.latch_exhausted);
        assert!(!config.policy.discard_stale);
        assert_eq!(config.policy.scroll_trigger, ScrollTrigger::Threshold);
        assert_eq!(config.session_id.as_deref(), Some("s3ss10n"));
        assert!(!config.hyperlinks);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config(&[("BANK_BASE_URL", "  "), ("BANK_TIMEOUT_SECS", "")]).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_values_name_the_key() {
        let err = config(&[("BANK_VIEWPORT_ROWS", "tall")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BANK_VIEWPORT_ROWS", .. }));

        let err = config(&[("BANK_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BANK_TIMEOUT_SECS", .. }));

        let err = config(&[("BANK_PAGING_MODE", "turbo")]).unwrap_err();
        assert!(err.to_string().contains("BANK_PAGING_MODE"));
    }
}
