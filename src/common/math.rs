//! Numeric primitives for the indicator engine.
//!
//! All helpers are total: short or empty input degrades to the most recent
//! value (or zero) instead of failing, so every indicator can run on any series.

/// Most recent value, or 0 for an empty series
pub fn last(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(0.0)
}

/// Trailing window of at most `period` values
pub fn window(values: &[f64], period: usize) -> &[f64] {
    &values[values.len().saturating_sub(period)..]
}

/// Simple moving average of the last `period` values.
///
/// With fewer than `period` points the most recent value is returned.
pub fn sma(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return last(values);
    }
    window(values, period).iter().sum::<f64>() / period as f64
}

/// Exponential moving average with `k = 2 / (period + 1)`, seeded with the
/// first value and iterated forward over the whole series.
///
/// Falls back to [`sma`] when the series is shorter than `period`.
pub fn ema(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return sma(values, period);
    }
    values[1..]
        .iter()
        .fold(values[0], |prev, &value| ema_from_previous(value, prev, period))
}

/// One EMA step from the previous average
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    value * k + previous * (1.0 - k)
}

/// Population standard deviation around `mean` over the trailing window
pub fn standard_deviation(values: &[f64], period: usize, mean: f64) -> f64 {
    let slice = window(values, period);
    if slice.is_empty() {
        return 0.0;
    }
    let variance = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / slice.len() as f64;
    variance.sqrt()
}

pub fn highest(values: &[f64], period: usize) -> f64 {
    window(values, period)
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

pub fn lowest(values: &[f64], period: usize) -> f64 {
    window(values, period)
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
}

/// Percent change from `base` to `current`; `None` when the base is zero or
/// the result is not finite.
pub fn percent_change(current: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    let change = (current - base) / base * 100.0;
    change.is_finite().then_some(change)
}

/// Clamp a strength score into [0, 100]; non-finite input maps to 0
pub fn clamp_strength(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
