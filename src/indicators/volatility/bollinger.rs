//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerReading;
use crate::models::signal::SignalDirection;

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Width (percent of price) below which the bands count as squeezed
const SQUEEZE_WIDTH: f64 = 1.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The signal is a volatility flag rather than a directional call: UP marks
/// band expansion, NEUTRAL a squeeze.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> BollingerReading {
    if period == 0 || closes.len() < period {
        let price = math::last(closes);
        return BollingerReading {
            upper: price,
            middle: price,
            lower: price,
            width: 0.0,
            signal: SignalDirection::Neutral,
            strength: 0.0,
        };
    }

    let middle = math::sma(closes, period);
    let std = math::standard_deviation(closes, period, middle);
    let upper = middle + std_dev * std;
    let lower = middle - std_dev * std;
    let width = if middle != 0.0 {
        (upper - lower) / middle * 100.0
    } else {
        0.0
    };

    let signal = if width < SQUEEZE_WIDTH {
        SignalDirection::Neutral
    } else {
        SignalDirection::Up
    };

    BollingerReading {
        upper,
        middle,
        lower,
        width,
        signal,
        strength: 50.0,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerReading {
    calculate_bollinger_bands(closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
