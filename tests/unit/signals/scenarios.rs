//! Market scenarios run end to end through the engine and the aggregator

use signalix::core::analysis::analyze_candles;
use signalix::models::signal::{MarketRegime, SignalDirection};

use crate::fixtures::{
    alternating_closes, candles_from_closes, compounding_closes, flat_closes,
    pullback_uptrend_closes,
};

#[test]
fn test_tally_always_covers_seven_indicators() {
    let series = [
        flat_closes(60, 100.0),
        pullback_uptrend_closes(60),
        compounding_closes(120, 100.0, 1.0),
        compounding_closes(120, 100.0, -1.0),
        alternating_closes(60, 100.0, 5.0),
        compounding_closes(5, 100.0, 0.5),
        Vec::new(),
    ];
    for closes in series {
        let (_, result) = analyze_candles(&candles_from_closes(&closes));
        assert_eq!(result.total(), 7);
        assert!((0.0..=100.0).contains(&result.alignment));
        assert!(result.up_score >= 0.0 && result.down_score >= 0.0);
        let unanimous = result.up_count == 7 || result.down_count == 7;
        assert_eq!(unanimous, result.alignment == 100.0);
    }
}

#[test]
fn test_flat_market_is_ranging() {
    let (bundle, result) = analyze_candles(&candles_from_closes(&flat_closes(60, 100.0)));
    assert_eq!(bundle.bollinger.signal, SignalDirection::Neutral);
    assert_eq!(bundle.bollinger.width, 0.0);
    assert_eq!(bundle.adx.value.as_f64(), Some(0.0));
    assert_eq!(result.market_regime, MarketRegime::Ranging);
    // Stochastic at mid-range, zero momentum and a zero MACD histogram all read DOWN
    assert_eq!(bundle.macd.signal, SignalDirection::Down);
    assert_eq!(result.up_count, 0);
    assert_eq!(result.down_count, 3);
    assert_eq!(result.neutral_count, 4);
}

#[test]
fn test_steady_uptrend_is_trending() {
    let (bundle, result) = analyze_candles(&candles_from_closes(&compounding_closes(
        120, 100.0, 1.0,
    )));
    assert!(bundle.adx.value.as_f64().unwrap_or(0.0) > 25.0);
    assert_eq!(result.market_regime, MarketRegime::Trending);
}

#[test]
fn test_choppy_market_is_volatile() {
    // SMA20 and SMA50 both sit at 100 so the ADX proxy is 0
    let (bundle, result) = analyze_candles(&candles_from_closes(&alternating_closes(
        60, 100.0, 5.0,
    )));
    assert_eq!(bundle.adx.value.as_f64(), Some(0.0));
    assert!(bundle.bollinger.width > 3.0);
    assert_eq!(result.market_regime, MarketRegime::Volatile);
}

#[test]
fn test_uptrend_with_pullbacks_leans_up() {
    let (bundle, result) = analyze_candles(&candles_from_closes(&pullback_uptrend_closes(60)));
    assert_eq!(bundle.rsi.signal, SignalDirection::Up);
    assert_eq!(bundle.momentum.signal, SignalDirection::Up);
    assert_eq!(bundle.macd.signal, SignalDirection::Up);
    assert_eq!(bundle.trend_signal.signal, SignalDirection::Up);
    assert_eq!(bundle.volume_trend.signal, SignalDirection::Neutral);
    assert!(result.up_count >= 4, "expected at least 4 UP votes, got {}", result.up_count);
    assert!(result.up_count > result.down_count);
    assert!(result.up_score > result.down_score);
    assert_eq!(result.market_regime, MarketRegime::Trending);
    assert_eq!(result.dominant_direction(), SignalDirection::Up);
}
