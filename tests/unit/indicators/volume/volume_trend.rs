//! Unit tests for the volume trend indicator

use signalix::indicators::volume::calculate_volume_trend_default;
use signalix::models::indicators::IndicatorValue;
use signalix::models::signal::SignalDirection;

use crate::fixtures::{candles_from_closes, flat_closes, with_volumes};

fn candles_with_last_volume(last: f64) -> Vec<signalix::models::indicators::Candle> {
    let mut volumes = vec![1_000.0; 19];
    volumes.push(last);
    with_volumes(candles_from_closes(&flat_closes(20, 100.0)), &volumes)
}

#[test]
fn test_volume_expansion_confirms() {
    // Average includes the spike: 20500 / 20 = 1025
    let volume = calculate_volume_trend_default(&candles_with_last_volume(1_500.0));
    assert_eq!(volume.value, IndicatorValue::Text("+46.3%".to_string()));
    assert_eq!(volume.signal, SignalDirection::Up);
    assert_eq!(volume.description, "Strong volume confirmation");
    assert!((volume.strength - 46.341).abs() < 1e-3);
}

#[test]
fn test_volume_contraction_is_never_down() {
    let volume = calculate_volume_trend_default(&candles_with_last_volume(500.0));
    assert_eq!(volume.value, IndicatorValue::Text("-48.7%".to_string()));
    assert_eq!(volume.signal, SignalDirection::Neutral);
    assert_eq!(volume.description, "Low volume");
}

#[test]
fn test_volume_flat_is_normal() {
    let volume = calculate_volume_trend_default(&candles_with_last_volume(1_000.0));
    assert_eq!(volume.value, IndicatorValue::Text("0.0%".to_string()));
    assert_eq!(volume.signal, SignalDirection::Neutral);
    assert_eq!(volume.description, "Normal volume");
    assert_eq!(volume.strength, 0.0);
}

#[test]
fn test_volume_zero_average_is_guarded() {
    let candles = with_volumes(candles_from_closes(&flat_closes(25, 100.0)), &[0.0; 25]);
    let volume = calculate_volume_trend_default(&candles);
    assert_eq!(volume.signal, SignalDirection::Neutral);
    assert_eq!(volume.strength, 0.0);
}

#[test]
fn test_volume_empty_series() {
    let volume = calculate_volume_trend_default(&[]);
    assert_eq!(volume.signal, SignalDirection::Neutral);
    assert_eq!(volume.strength, 0.0);
}
