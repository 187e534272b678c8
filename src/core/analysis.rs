//! Analysis pipeline: fetch candles, compute indicators, aggregate votes,
//! and optionally ask the narrative generator for a verdict.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::config::markets::{MarketPair, Timeframe};
use crate::indicators::engine::compute_indicators;
use crate::metrics::Metrics;
use crate::models::indicators::{Candle, IndicatorBundle};
use crate::models::signal::AggregationResult;
use crate::models::verdict::{NarrativeRequest, Verdict};
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::services::narrative::{NarrativeError, NarrativeGenerator};
use crate::signals::aggregation::aggregate;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
    #[error(transparent)]
    Narrative(#[from] NarrativeError),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub pair: String,
    pub timeframe: String,
    pub last_price: f64,
    pub candle_count: usize,
    pub indicators: IndicatorBundle,
    pub aggregation: AggregationResult,
    pub narrative: NarrativeRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

/// Run the engine and the aggregator over `candles`
pub fn analyze_candles(candles: &[Candle]) -> (IndicatorBundle, AggregationResult) {
    let indicators = compute_indicators(candles);
    let aggregation = aggregate(&indicators);
    (indicators, aggregation)
}

pub struct AnalysisPipeline {
    provider: Arc<dyn MarketDataProvider>,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
    metrics: Option<Arc<Metrics>>,
}

impl AnalysisPipeline {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            narrator: None,
            metrics: None,
        }
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    #[instrument(skip_all, fields(pair = pair.symbol, timeframe = timeframe.value))]
    pub async fn run(
        &self,
        pair: &MarketPair,
        timeframe: &Timeframe,
    ) -> Result<AnalysisReport, AnalysisError> {
        let candles = match self.provider.get_candles(pair, timeframe).await {
            Ok(candles) if candles.is_empty() => {
                self.record_fetch_error();
                return Err(MarketDataError::EmptySeries(pair.symbol.to_string()).into());
            }
            Ok(candles) => candles,
            Err(e) => {
                warn!(error = %e, "Market data fetch failed");
                self.record_fetch_error();
                return Err(e.into());
            }
        };

        let (indicators, aggregation) = analyze_candles(&candles);
        let narrative = NarrativeRequest::new(pair.name, timeframe.value, &candles, &indicators);

        let verdict = match &self.narrator {
            Some(narrator) => Some(narrator.generate(&narrative).await?),
            None => None,
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_analysis(aggregation.market_regime);
        }

        info!(
            candles = candles.len(),
            up = aggregation.up_count,
            down = aggregation.down_count,
            alignment = aggregation.alignment,
            regime = %aggregation.market_regime,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            pair: pair.symbol.to_string(),
            timeframe: timeframe.value.to_string(),
            last_price: narrative.last_price,
            candle_count: candles.len(),
            indicators,
            aggregation,
            narrative,
            verdict,
        })
    }

    fn record_fetch_error(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.market_data_errors_total.inc();
        }
    }
}
