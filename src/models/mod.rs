//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;
pub mod verdict;

pub use indicators::{
    BollingerReading, Candle, IndicatorBundle, IndicatorReading, IndicatorValue, MacdReading,
    StochasticReading, TrendReading,
};
pub use signal::{AggregationResult, MarketRegime, SignalDirection};
pub use verdict::{CandleSnapshot, IndicatorSummary, NarrativeRequest, Verdict};
