//! Market data provider interface

use async_trait::async_trait;
use thiserror::Error;

use crate::config::markets::{MarketPair, Timeframe};
use crate::models::indicators::Candle;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("market data API error: {0}")]
    Api(String),
    #[error("unknown timeframe: {0}")]
    UnknownTimeframe(String),
    #[error("unsupported pair: {0}")]
    UnsupportedPair(String),
    #[error("no candles returned for {0}")]
    EmptySeries(String),
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl MarketDataError {
    /// Whether retrying the same request can succeed
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Http(e) => e.is_timeout() || e.is_connect(),
            MarketDataError::Status(status) => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// Whether the caller asked for something the catalogue does not know
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MarketDataError::UnknownTimeframe(_) | MarketDataError::UnsupportedPair(_)
        )
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical candles for a pair, oldest first
    async fn get_candles(
        &self,
        pair: &MarketPair,
        timeframe: &Timeframe,
    ) -> Result<Vec<Candle>, MarketDataError>;
}

/// Provider serving a fixed candle series regardless of pair or timeframe
pub struct StaticMarketDataProvider {
    candles: Vec<Candle>,
}

impl StaticMarketDataProvider {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_candles(
        &self,
        _pair: &MarketPair,
        _timeframe: &Timeframe,
    ) -> Result<Vec<Candle>, MarketDataError> {
        Ok(self.candles.clone())
    }
}
