//! Indicator catalogue and the trait the aggregator votes through

use serde::Serialize;

use crate::models::indicators::{
    BollingerReading, IndicatorBundle, IndicatorReading, MacdReading, StochasticReading,
    TrendReading,
};
use crate::models::signal::SignalDirection;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
}

/// A reading that can cast a directional vote
pub trait Directional {
    fn direction(&self) -> SignalDirection;

    /// Vote weight in [0, 100]
    fn strength(&self) -> f64;
}

macro_rules! impl_directional {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Directional for $ty {
                fn direction(&self) -> SignalDirection {
                    self.signal
                }

                fn strength(&self) -> f64 {
                    self.strength
                }
            }
        )+
    };
}

impl_directional!(
    IndicatorReading,
    StochasticReading,
    MacdReading,
    TrendReading,
    BollingerReading,
);

/// Every indicator the engine produces a reading for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Rsi,
    Stochastic,
    Momentum,
    Roc,
    Macd,
    Adx,
    TrendSignal,
    Bollinger,
    VolumeTrend,
}

/// Indicators counted by the aggregator. ADX and ROC are computed but only
/// describe market character, so they stay out of the directional tally.
pub const TALLIED_INDICATORS: [IndicatorKind; 7] = [
    IndicatorKind::Rsi,
    IndicatorKind::Stochastic,
    IndicatorKind::Macd,
    IndicatorKind::TrendSignal,
    IndicatorKind::Momentum,
    IndicatorKind::Bollinger,
    IndicatorKind::VolumeTrend,
];

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 9] = [
        IndicatorKind::Rsi,
        IndicatorKind::Stochastic,
        IndicatorKind::Momentum,
        IndicatorKind::Roc,
        IndicatorKind::Macd,
        IndicatorKind::Adx,
        IndicatorKind::TrendSignal,
        IndicatorKind::Bollinger,
        IndicatorKind::VolumeTrend,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Stochastic => "Stochastic",
            IndicatorKind::Momentum => "Momentum",
            IndicatorKind::Roc => "ROC",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::TrendSignal => "Trend",
            IndicatorKind::Bollinger => "Bollinger",
            IndicatorKind::VolumeTrend => "Volume",
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Rsi
            | IndicatorKind::Stochastic
            | IndicatorKind::Momentum
            | IndicatorKind::Roc => IndicatorCategory::Momentum,
            IndicatorKind::Macd | IndicatorKind::Adx | IndicatorKind::TrendSignal => {
                IndicatorCategory::Trend
            }
            IndicatorKind::Bollinger => IndicatorCategory::Volatility,
            IndicatorKind::VolumeTrend => IndicatorCategory::Volume,
        }
    }

    pub fn is_tallied(&self) -> bool {
        TALLIED_INDICATORS.contains(self)
    }
}

/// One reading tagged with its catalogue metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorVote {
    pub name: &'static str,
    pub category: IndicatorCategory,
    pub signal: SignalDirection,
    pub strength: f64,
    /// Whether the aggregator counts this reading
    pub tallied: bool,
}

impl IndicatorBundle {
    /// Every reading in catalogue order, tagged with name and category
    pub fn votes(&self) -> Vec<IndicatorVote> {
        IndicatorKind::ALL
            .iter()
            .map(|&kind| {
                let reading = self.reading(kind);
                IndicatorVote {
                    name: kind.name(),
                    category: kind.category(),
                    signal: reading.direction(),
                    strength: reading.strength(),
                    tallied: kind.is_tallied(),
                }
            })
            .collect()
    }

    /// Reading for `kind` viewed through its directional vote
    pub fn reading(&self, kind: IndicatorKind) -> &dyn Directional {
        match kind {
            IndicatorKind::Rsi => &self.rsi,
            IndicatorKind::Stochastic => &self.stochastic,
            IndicatorKind::Momentum => &self.momentum,
            IndicatorKind::Roc => &self.roc,
            IndicatorKind::Macd => &self.macd,
            IndicatorKind::Adx => &self.adx,
            IndicatorKind::TrendSignal => &self.trend_signal,
            IndicatorKind::Bollinger => &self.bollinger,
            IndicatorKind::VolumeTrend => &self.volume_trend,
        }
    }
}
