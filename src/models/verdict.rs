//! Types exchanged with the narrative collaborator.

use serde::{Deserialize, Serialize};

use crate::models::indicators::{Candle, IndicatorBundle, IndicatorValue};
use crate::models::signal::SignalDirection;

/// Number of trailing candles forwarded with a narrative request
pub const RECENT_CANDLES: usize = 15;

/// Condensed candle with an `HH:MM` UTC label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSnapshot {
    pub t: String,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

impl From<&Candle> for CandleSnapshot {
    fn from(candle: &Candle) -> Self {
        let t = candle
            .timestamp()
            .map(|ts| ts.format("%H:%M").to_string())
            .unwrap_or_default();
        Self {
            t,
            o: candle.open,
            h: candle.high,
            l: candle.low,
            c: candle.close,
            v: candle.volume_quote,
        }
    }
}

/// Subset of the bundle the narrative generator reasons about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    pub rsi: IndicatorValue,
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub macd: f64,
}

impl From<&IndicatorBundle> for IndicatorSummary {
    fn from(bundle: &IndicatorBundle) -> Self {
        Self {
            rsi: bundle.rsi.value.clone(),
            sma20: bundle.sma20,
            sma50: bundle.sma50,
            sma200: bundle.sma200,
            bollinger_upper: bundle.bollinger.upper,
            bollinger_lower: bundle.bollinger.lower,
            macd: bundle.macd.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub pair_name: String,
    pub timeframe: String,
    pub last_price: f64,
    pub indicators: IndicatorSummary,
    pub recent_candles: Vec<CandleSnapshot>,
}

impl NarrativeRequest {
    pub fn new(
        pair_name: impl Into<String>,
        timeframe: impl Into<String>,
        candles: &[Candle],
        bundle: &IndicatorBundle,
    ) -> Self {
        let start = candles.len().saturating_sub(RECENT_CANDLES);
        Self {
            pair_name: pair_name.into(),
            timeframe: timeframe.into(),
            last_price: candles.last().map(|c| c.close).unwrap_or(0.0),
            indicators: IndicatorSummary::from(bundle),
            recent_candles: candles[start..].iter().map(CandleSnapshot::from).collect(),
        }
    }
}

/// Free-form verdict returned by the narrative generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub verdict: SignalDirection,
    pub confidence: f64,
    #[serde(default)]
    pub time_horizon: String,
    pub prediction_duration: String,
    pub summary: String,
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default)]
    pub risk_warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought_process: Option<String>,
}
