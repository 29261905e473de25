//! Environment-driven configuration.

use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::ConfigError;

/// Default Bitazza Level-1 summary endpoint. OMS 1 carries the THB markets.
pub const DEFAULT_SUMMARY_URL: &str =
    "https://apexapi.bitazza.com:8443/AP/GetLevel1Summary?OMSId=1";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Level-1 summary endpoint to quote from.
    pub summary_url: Url,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `BOT_TOKEN` is required. `SUMMARY_URL` overrides the default quote
    /// endpoint; `RUST_LOG` overrides the default `info` filter.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingField { field: "BOT_TOKEN" })?;

        let raw_url =
            std::env::var("SUMMARY_URL").unwrap_or_else(|_| DEFAULT_SUMMARY_URL.to_string());
        let summary_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidValue {
            field: "SUMMARY_URL",
            reason: e.to_string(),
        })?;

        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bot_token,
            summary_url,
            log_filter,
        })
    }

    /// Initialize the tracing subscriber with this configuration.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_filter));
        fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_missing_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("BOT_TOKEN");
        std::env::remove_var("SUMMARY_URL");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { field: "BOT_TOKEN" }
        ));
    }

    #[test]
    fn from_env_empty_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("BOT_TOKEN", "");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { field: "BOT_TOKEN" }
        ));

        std::env::remove_var("BOT_TOKEN");
    }

    #[test]
    fn from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("BOT_TOKEN", "test-token");
        std::env::remove_var("SUMMARY_URL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bot_token, "test-token");
        assert_eq!(config.summary_url.as_str(), DEFAULT_SUMMARY_URL);

        std::env::remove_var("BOT_TOKEN");
    }

    #[test]
    fn from_env_invalid_summary_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("BOT_TOKEN", "test-token");
        std::env::set_var("SUMMARY_URL", "not a url");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "SUMMARY_URL",
                ..
            }
        ));

        std::env::remove_var("BOT_TOKEN");
        std::env::remove_var("SUMMARY_URL");
    }

    #[test]
    fn from_env_summary_url_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("BOT_TOKEN", "test-token");
        std::env::set_var("SUMMARY_URL", "https://example.com/summary?OMSId=1");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.summary_url.as_str(),
            "https://example.com/summary?OMSId=1"
        );

        std::env::remove_var("BOT_TOKEN");
        std::env::remove_var("SUMMARY_URL");
    }
}
