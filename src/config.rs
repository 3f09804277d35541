use std::time::Duration;
use thiserror::Error;
use crate::api::{FetchOptions, TonApiClient};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`) once at startup
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub tonapi_key: String,
    pub tonapi_base_url: String,
    pub transaction_limit: u32,
    pub request_timeout: Duration,
    pub strict_status: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("tonapi_key", &"<redacted>")
            .field("tonapi_base_url", &self.tonapi_base_url)
            .field("transaction_limit", &self.transaction_limit)
            .field("request_timeout", &self.request_timeout)
            .field("strict_status", &self.strict_status)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("DISCORD_TOKEN"))
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;
        let tonapi_key = get("TONAPI_KEY").ok_or(ConfigError::Missing("TONAPI_KEY"))?;

        let tonapi_base_url = get("TONAPI_BASE_URL")
            .unwrap_or_else(|| TonApiClient::DEFAULT_BASE_URL.to_string());

        let defaults = FetchOptions::default();
        let transaction_limit = match get("TONAPI_TX_LIMIT") {
            Some(v) => parse_positive("TONAPI_TX_LIMIT", &v)?,
            None => defaults.limit,
        };
        let request_timeout = match get("TONAPI_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_positive("TONAPI_TIMEOUT_SECS", &v)?.into()),
            None => defaults.timeout,
        };
        let strict_status = match get("TONAPI_STRICT_STATUS") {
            Some(v) => parse_flag("TONAPI_STRICT_STATUS", &v)?,
            None => false,
        };

        Ok(Self {
            bot_token,
            tonapi_key,
            tonapi_base_url,
            transaction_limit,
            request_timeout,
            strict_status,
        })
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            limit: self.transaction_limit,
            timeout: self.request_timeout,
        }
    }

    pub fn tonapi_client(&self) -> TonApiClient {
        TonApiClient::with_base_url(self.tonapi_key.clone(), self.tonapi_base_url.clone())
            .strict_status(self.strict_status)
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid { name, value: value.to_string() }),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("BOT_TOKEN", "bot"), ("TONAPI_KEY", "key")]).unwrap();
        assert_eq!(config.bot_token, "bot");
        assert_eq!(config.tonapi_key, "key");
        assert_eq!(config.tonapi_base_url, "https://tonapi.io/v2");
        assert_eq!(config.fetch_options(), FetchOptions { limit: 1000, timeout: Duration::from_secs(30) });
        assert!(!config.strict_status);
    }

    #[test]
    fn test_missing_credentials_are_fatal() {
        assert_eq!(load(&[("TONAPI_KEY", "key")]).unwrap_err(), ConfigError::Missing("BOT_TOKEN"));
        assert_eq!(load(&[("BOT_TOKEN", "bot")]).unwrap_err(), ConfigError::Missing("TONAPI_KEY"));
        assert_eq!(
            load(&[("BOT_TOKEN", "  "), ("TONAPI_KEY", "key")]).unwrap_err(),
            ConfigError::Missing("BOT_TOKEN")
        );
    }

    #[test]
    fn test_discord_token_fallback() {
        let config = load(&[("DISCORD_TOKEN", "legacy"), ("TONAPI_KEY", "key")]).unwrap();
        assert_eq!(config.bot_token, "legacy");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BOT_TOKEN", "bot"),
            ("TONAPI_KEY", "key"),
            ("TONAPI_BASE_URL", "http://localhost:9000"),
            ("TONAPI_TX_LIMIT", "250"),
            ("TONAPI_TIMEOUT_SECS", "5"),
            ("TONAPI_STRICT_STATUS", "yes"),
        ])
        .unwrap();
        assert_eq!(config.tonapi_base_url, "http://localhost:9000");
        assert_eq!(config.transaction_limit, 250);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.strict_status);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = load(&[("BOT_TOKEN", "bot"), ("TONAPI_KEY", "key"), ("TONAPI_TX_LIMIT", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TONAPI_TX_LIMIT", .. }));

        let err = load(&[("BOT_TOKEN", "bot"), ("TONAPI_KEY", "key"), ("TONAPI_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TONAPI_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = load(&[("BOT_TOKEN", "bot-secret"), ("TONAPI_KEY", "api-secret")]).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("bot-secret"));
        assert!(!rendered.contains("api-secret"));
    }
}
