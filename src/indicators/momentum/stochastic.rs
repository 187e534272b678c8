//! Stochastic oscillator

use crate::common::math;
use crate::models::indicators::{Candle, StochasticReading};
use crate::models::signal::SignalDirection;

pub const STOCHASTIC_PERIOD: usize = 14;

/// Calculate the stochastic oscillator
///
/// %K = (Close - Lowest Low) / (Highest High - Lowest Low) * 100
///
/// %D is approximated as %K. A true %D needs a history of %K values; callers
/// comparing against textbook %D will see different numbers.
pub fn calculate_stochastic(candles: &[Candle], period: usize) -> StochasticReading {
    let Some(current) = candles.last().filter(|_| period > 0 && candles.len() >= period) else {
        return neutral();
    };

    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let highest_high = math::highest(&highs, period);
    let lowest_low = math::lowest(&lows, period);
    let range = highest_high - lowest_low;
    if range == 0.0 || !range.is_finite() {
        return neutral();
    }

    let k = (current.close - lowest_low) / range * 100.0;
    let signal = if k < 20.0 {
        SignalDirection::Up
    } else if k > 80.0 {
        SignalDirection::Down
    } else if k > 50.0 {
        SignalDirection::Up
    } else {
        SignalDirection::Down
    };

    StochasticReading {
        k,
        d: k,
        signal,
        strength: math::clamp_strength((k - 50.0).abs() + 20.0),
    }
}

fn neutral() -> StochasticReading {
    StochasticReading {
        k: 50.0,
        d: 50.0,
        signal: SignalDirection::Neutral,
        strength: 0.0,
    }
}

/// Calculate the stochastic oscillator with default period (14)
pub fn calculate_stochastic_default(candles: &[Candle]) -> StochasticReading {
    calculate_stochastic(candles, STOCHASTIC_PERIOD)
}
