//! Unit tests for the stochastic oscillator

use signalix::indicators::momentum::{calculate_stochastic, calculate_stochastic_default};
use signalix::models::signal::SignalDirection;

use crate::fixtures::{candles_from_closes, flat_closes, ranged_candles};

fn with_last_close(close: f64) -> Vec<signalix::models::indicators::Candle> {
    let mut closes = vec![100.0; 13];
    closes.push(close);
    ranged_candles(&closes, 110.0, 90.0)
}

#[test]
fn test_stochastic_insufficient_data() {
    let candles = ranged_candles(&[100.0; 13], 110.0, 90.0);
    let stoch = calculate_stochastic_default(&candles);
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.signal, SignalDirection::Neutral);
    assert_eq!(stoch.strength, 0.0);
}

#[test]
fn test_stochastic_zero_range_is_neutral() {
    let candles = ranged_candles(&[100.0; 20], 100.0, 100.0);
    let stoch = calculate_stochastic_default(&candles);
    assert_eq!(stoch.signal, SignalDirection::Neutral);
    assert_eq!(stoch.strength, 0.0);
    assert!(stoch.k.is_finite());
}

#[test]
fn test_stochastic_oversold_reads_up() {
    let stoch = calculate_stochastic_default(&with_last_close(92.0));
    assert!((stoch.k - 10.0).abs() < 1e-9);
    assert_eq!(stoch.signal, SignalDirection::Up);
    assert!((stoch.strength - 60.0).abs() < 1e-9);
}

#[test]
fn test_stochastic_overbought_reads_down() {
    let stoch = calculate_stochastic_default(&with_last_close(108.0));
    assert!((stoch.k - 90.0).abs() < 1e-9);
    assert_eq!(stoch.signal, SignalDirection::Down);
    assert!((stoch.strength - 60.0).abs() < 1e-9);
}

#[test]
fn test_stochastic_upper_half_reads_up() {
    let stoch = calculate_stochastic_default(&with_last_close(105.0));
    assert!((stoch.k - 75.0).abs() < 1e-9);
    assert_eq!(stoch.signal, SignalDirection::Up);
    assert!((stoch.strength - 45.0).abs() < 1e-9);
}

#[test]
fn test_stochastic_lower_half_reads_down() {
    let stoch = calculate_stochastic_default(&with_last_close(95.0));
    assert!((stoch.k - 25.0).abs() < 1e-9);
    assert_eq!(stoch.signal, SignalDirection::Down);
}

#[test]
fn test_stochastic_d_mirrors_k() {
    let candles = candles_from_closes(&flat_closes(30, 100.0));
    let stoch = calculate_stochastic(&candles, 14);
    assert_eq!(stoch.k, stoch.d);
}
