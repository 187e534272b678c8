//! SMA crossover trend signal

use crate::models::indicators::TrendReading;
use crate::models::signal::SignalDirection;

const TREND_STRENGTH: f64 = 67.0;

/// Compare the latest close and SMA20 against SMA50
pub fn calculate_trend_signal(price: f64, sma20: f64, sma50: f64) -> TrendReading {
    let (signal, description) = if price > sma50 && sma20 > sma50 {
        (SignalDirection::Up, "Price above SMA50 - Bullish")
    } else if price < sma50 && sma20 < sma50 {
        (SignalDirection::Down, "Price below SMA50 - Bearish")
    } else {
        (SignalDirection::Neutral, "Sideways")
    };

    TrendReading {
        signal,
        description: description.to_string(),
        strength: TREND_STRENGTH,
    }
}
