//! Rate of Change indicator

use crate::common::math;
use crate::models::indicators::IndicatorReading;
use crate::models::signal::SignalDirection;

pub const ROC_PERIOD: usize = 9;

/// ROC = (Close - Close[period ago]) / Close[period ago] * 100
pub fn calculate_roc(closes: &[f64], period: usize) -> IndicatorReading {
    if period == 0 || closes.len() < period + 1 {
        return IndicatorReading::placeholder(0.0, "N/A");
    }

    let current = closes[closes.len() - 1];
    let previous = closes[closes.len() - 1 - period];
    let Some(roc) = math::percent_change(current, previous) else {
        return IndicatorReading::placeholder(0.0, "N/A");
    };

    let (signal, description) = if roc > 0.0 {
        (SignalDirection::Up, "Positive rate of change")
    } else if roc < 0.0 {
        (SignalDirection::Down, "Negative rate of change")
    } else {
        (SignalDirection::Neutral, "Flat rate of change")
    };

    IndicatorReading::new(
        format!("{:.2}%", roc),
        signal,
        description,
        (roc.abs() * 20.0).min(100.0),
    )
}

pub fn calculate_roc_default(closes: &[f64]) -> IndicatorReading {
    calculate_roc(closes, ROC_PERIOD)
}
