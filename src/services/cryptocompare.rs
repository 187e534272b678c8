//! CryptoCompare OHLCV history provider

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::markets::{MarketPair, Timeframe};
use crate::config::Config;
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HistoryResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<HistoryData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HistoryData {
    #[serde(default)]
    data: Vec<HistoryRow>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    /// Volume in the quote currency
    volumeto: f64,
}

impl From<HistoryRow> for Candle {
    fn from(row: HistoryRow) -> Self {
        Candle::new(row.time, row.open, row.high, row.low, row.close, row.volumeto)
    }
}

/// CryptoCompare REST client for `histominute` / `histohour` / `histoday`.
pub struct CryptoCompareProvider {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    max_retries: usize,
    retry_delay: Duration,
}

impl CryptoCompareProvider {
    pub fn new(config: &Config) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(
            &config.cryptocompare_api_url,
            config.cryptocompare_api_key.clone(),
            client,
        )?
        .with_retry(config.max_retries, config.retry_delay))
    }

    pub fn with_client(
        base_url: &str,
        api_key: Option<String>,
        client: Client,
    ) -> Result<Self, MarketDataError> {
        let base_url =
            Url::parse(base_url).map_err(|e| MarketDataError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(MarketDataError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url,
            api_key,
            max_retries: 3,
            retry_delay: Duration::from_millis(200),
        })
    }

    pub fn with_retry(mut self, max_retries: usize, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    fn history_url(&self, pair: &MarketPair, timeframe: &Timeframe) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected at construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(timeframe.granularity.endpoint());
        }
        url.query_pairs_mut()
            .append_pair("fsym", pair.base)
            .append_pair("tsym", pair.quote)
            .append_pair("limit", &timeframe.limit.to_string())
            .append_pair("aggregate", &timeframe.aggregate.to_string());
        url
    }

    async fn fetch_once(&self, url: &Url) -> Result<Vec<Candle>, MarketDataError> {
        let mut request = self.client.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.header("authorization", format!("Apikey {}", key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status(status));
        }

        let body: HistoryResponse = response.json().await?;
        if body.response == "Error" {
            return Err(MarketDataError::Api(body.message));
        }

        Ok(body
            .data
            .unwrap_or_default()
            .data
            .into_iter()
            .map(Candle::from)
            .collect())
    }
}

#[async_trait]
impl MarketDataProvider for CryptoCompareProvider {
    async fn get_candles(
        &self,
        pair: &MarketPair,
        timeframe: &Timeframe,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.history_url(pair, timeframe);
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry_delay)
            .with_max_times(self.max_retries);

        let candles = (|| async { self.fetch_once(&url).await })
            .retry(backoff)
            .when(MarketDataError::is_transient)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    pair = pair.symbol,
                    timeframe = timeframe.value,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "CryptoCompare request failed, retrying"
                );
            })
            .await?;

        debug!(
            pair = pair.symbol,
            timeframe = timeframe.value,
            count = candles.len(),
            "Fetched {} candles from CryptoCompare",
            candles.len()
        );
        Ok(candles)
    }
}
