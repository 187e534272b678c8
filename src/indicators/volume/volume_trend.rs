//! Volume trend against its 20-period average

use crate::common::math;
use crate::models::indicators::{Candle, IndicatorReading};
use crate::models::signal::SignalDirection;

pub const VOLUME_PERIOD: usize = 20;

/// Percent change of the latest volume versus SMA(volume, period).
///
/// Expansion reads UP; contraction is never DOWN because volume only
/// confirms moves.
pub fn calculate_volume_trend(candles: &[Candle], period: usize) -> IndicatorReading {
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume_quote).collect();
    let current = math::last(&volumes);
    let average = math::sma(&volumes, period);
    let change = math::percent_change(current, average).unwrap_or(0.0);

    let signal = if change > 0.0 {
        SignalDirection::Up
    } else {
        SignalDirection::Neutral
    };
    let description = if change > 20.0 {
        "Strong volume confirmation"
    } else if change < -20.0 {
        "Low volume"
    } else {
        "Normal volume"
    };

    IndicatorReading::new(
        format!("{}{:.1}%", if change > 0.0 { "+" } else { "" }, change),
        signal,
        description,
        change.abs().min(100.0),
    )
}

pub fn calculate_volume_trend_default(candles: &[Candle]) -> IndicatorReading {
    calculate_volume_trend(candles, VOLUME_PERIOD)
}
