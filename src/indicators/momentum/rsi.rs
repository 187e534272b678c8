//! RSI (Relative Strength Index) indicator

use crate::models::indicators::IndicatorReading;
use crate::models::signal::SignalDirection;

pub const RSI_PERIOD: usize = 14;

/// Calculate RSI over the trailing window of `period` deltas
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The averages are recomputed from the trailing window on every call; there is
/// no Wilder running smoothing. A window without losses yields 50.
pub fn calculate_rsi(closes: &[f64], period: usize) -> IndicatorReading {
    if period == 0 || closes.len() < period + 1 {
        return IndicatorReading::placeholder(50.0, "Insufficient data");
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in closes[closes.len() - period - 1..].windows(2) {
        let change = pair[1] - pair[0];
        if change >= 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;
    let rsi = if avg_loss != 0.0 {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    } else {
        50.0
    };

    let (signal, description, strength) = classify_rsi(rsi);
    IndicatorReading::new(format!("{:.1}", rsi), signal, description, strength)
}

fn classify_rsi(rsi: f64) -> (SignalDirection, &'static str, f64) {
    if rsi > 70.0 {
        // Overbought reads as reversal risk
        (SignalDirection::Down, "Overbought - potential reversal", 85.0)
    } else if rsi < 30.0 {
        (SignalDirection::Up, "Oversold - potential bounce", 85.0)
    } else if rsi > 55.0 {
        (SignalDirection::Up, "Bullish momentum", 60.0)
    } else if rsi < 45.0 {
        (SignalDirection::Down, "Bearish momentum", 60.0)
    } else {
        (SignalDirection::Neutral, "Neutral range", 50.0)
    }
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> IndicatorReading {
    calculate_rsi(closes, RSI_PERIOD)
}
