//! Unit tests for the ADX trend strength proxy

use signalix::indicators::trend::calculate_adx;
use signalix::models::indicators::IndicatorValue;
use signalix::models::signal::SignalDirection;

#[test]
fn test_adx_wide_spread_is_capped() {
    let adx = calculate_adx(110.0, 100.0);
    assert_eq!(adx.value, IndicatorValue::Text("100.0".to_string()));
    assert_eq!(adx.description, "Very strong trend");
    assert_eq!(adx.strength, 100.0);
}

#[test]
fn test_adx_strong_trend() {
    let adx = calculate_adx(100.6, 100.0);
    assert_eq!(adx.value.as_f64(), Some(30.0));
    assert_eq!(adx.description, "Strong trend");
}

#[test]
fn test_adx_weak_trend() {
    let adx = calculate_adx(99.7, 100.0);
    assert_eq!(adx.value.as_f64(), Some(15.0));
    assert_eq!(adx.description, "Weak trend");
}

#[test]
fn test_adx_is_never_directional() {
    for (sma20, sma50) in [(110.0, 100.0), (90.0, 100.0), (100.0, 100.0)] {
        assert_eq!(calculate_adx(sma20, sma50).signal, SignalDirection::Neutral);
    }
}

#[test]
fn test_adx_zero_sma50() {
    let adx = calculate_adx(5.0, 0.0);
    assert_eq!(adx.value.as_f64(), Some(0.0));
    assert_eq!(adx.strength, 0.0);
}
