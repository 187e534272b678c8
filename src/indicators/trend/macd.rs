//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdReading;
use crate::models::signal::SignalDirection;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;

/// Signal line approximation factor applied to the MACD line
pub const SIGNAL_LINE_FACTOR: f64 = 0.9;

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal ≈ 0.9 * MACD (approximation; no 9-period EMA of the MACD history)
/// Histogram = MACD - Signal
///
/// Replacing the approximation with a real signal EMA changes every
/// downstream histogram sign and strength.
pub fn calculate_macd(closes: &[f64], fast_period: usize, slow_period: usize) -> MacdReading {
    let fast_ema = math::ema(closes, fast_period);
    let slow_ema = math::ema(closes, slow_period);

    let macd_line = fast_ema - slow_ema;
    let signal_line = macd_line * SIGNAL_LINE_FACTOR;
    let histogram = macd_line - signal_line;

    // A flat histogram counts against the trend
    let (signal, description) = if histogram > 0.0 {
        (SignalDirection::Up, "Bullish crossover detected")
    } else {
        (SignalDirection::Down, "Bearish divergence")
    };

    MacdReading {
        value: macd_line,
        signal_line,
        histogram,
        signal,
        description: description.to_string(),
        strength: math::clamp_strength(histogram.abs() * 1000.0),
    }
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_default(closes: &[f64]) -> MacdReading {
    calculate_macd(closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD)
}
