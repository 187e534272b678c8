//! Raw price momentum

use crate::models::indicators::IndicatorReading;
use crate::models::signal::SignalDirection;

pub const MOMENTUM_PERIOD: usize = 10;
const MOMENTUM_STRENGTH: f64 = 60.0;

/// Difference between the latest close and the first close of the trailing
/// `period`-close window. Strength is a fixed constant, not derived from the
/// size of the move.
pub fn calculate_momentum(closes: &[f64], period: usize) -> IndicatorReading {
    if period == 0 || closes.len() < period {
        return IndicatorReading::placeholder(0.0, "Insufficient data");
    }

    let current = closes[closes.len() - 1];
    let reference = closes[closes.len() - period];
    let change = current - reference;
    let signal = if change > 0.0 {
        SignalDirection::Up
    } else {
        SignalDirection::Down
    };

    IndicatorReading::new(
        format!("{:.2}", change),
        signal,
        format!("{}-period Momentum", period),
        MOMENTUM_STRENGTH,
    )
}

pub fn calculate_momentum_default(closes: &[f64]) -> IndicatorReading {
    calculate_momentum(closes, MOMENTUM_PERIOD)
}
