//! Runtime configuration loaded from the environment

pub mod markets;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub use markets::*;

pub const DEFAULT_CRYPTOCOMPARE_API_URL: &str = "https://min-api.cryptocompare.com/data/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Deployment environment (`APP_ENV`), defaulting to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cryptocompare_api_url: String,
    pub cryptocompare_api_key: Option<String>,
    pub request_timeout: Duration,
    pub max_retries: usize,
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cryptocompare_api_url: DEFAULT_CRYPTOCOMPARE_API_URL.to_string(),
            cryptocompare_api_key: None,
            request_timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_delay: Duration::from_millis(200),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            cryptocompare_api_url: env::var("CRYPTOCOMPARE_API_URL")
                .unwrap_or(defaults.cryptocompare_api_url),
            cryptocompare_api_key: env::var("CRYPTOCOMPARE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            request_timeout: parse_var("MARKET_DATA_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_retries: parse_var("MARKET_DATA_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            retry_delay: parse_var("MARKET_DATA_RETRY_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_delay),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}
