use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::signal::SignalDirection;

/// One OHLC bucket with quote-currency volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Bucket open time in unix seconds
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(alias = "volumeto")]
    pub volume_quote: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume_quote: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume_quote,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// Display value of a reading: either a raw number or a pre-formatted string
/// such as `"62.4"` or `"+12.5%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
}

impl IndicatorValue {
    /// Numeric view of the value. Formatted strings are parsed after
    /// stripping sign and percent decorations.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndicatorValue::Number(n) => Some(*n),
            IndicatorValue::Text(s) => s.trim().trim_end_matches('%').parse().ok(),
        }
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        IndicatorValue::Number(value)
    }
}

impl From<String> for IndicatorValue {
    fn from(value: String) -> Self {
        IndicatorValue::Text(value)
    }
}

/// Generic indicator output consumed by the aggregator and the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub value: IndicatorValue,
    pub signal: SignalDirection,
    pub description: String,
    /// Magnitude of the reading in [0, 100], independent of direction
    pub strength: f64,
}

impl IndicatorReading {
    pub fn new(
        value: impl Into<IndicatorValue>,
        signal: SignalDirection,
        description: impl Into<String>,
        strength: f64,
    ) -> Self {
        Self {
            value: value.into(),
            signal,
            description: description.into(),
            strength,
        }
    }

    /// Neutral reading with zero strength, used when the series is too short
    pub fn placeholder(value: impl Into<IndicatorValue>, description: impl Into<String>) -> Self {
        Self::new(value, SignalDirection::Neutral, description, 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticReading {
    pub k: f64,
    /// Equal to `k`: no independent %D smoothing is performed
    pub d: f64,
    pub signal: SignalDirection,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdReading {
    /// MACD line (EMA12 - EMA26)
    pub value: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub signal: SignalDirection,
    pub description: String,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReading {
    pub signal: SignalDirection,
    pub description: String,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerReading {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// Band width as a percent of the middle band
    pub width: f64,
    pub signal: SignalDirection,
    pub strength: f64,
}

/// Full set of readings produced by one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorBundle {
    // Momentum
    pub rsi: IndicatorReading,
    pub stochastic: StochasticReading,
    pub momentum: IndicatorReading,
    pub roc: IndicatorReading,

    // Trend
    pub macd: MacdReading,
    pub adx: IndicatorReading,
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    pub trend_signal: TrendReading,

    // Volatility
    pub bollinger: BollingerReading,

    // Volume
    pub volume_trend: IndicatorReading,
}
