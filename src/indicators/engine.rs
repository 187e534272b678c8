//! Indicator engine: candle series in, full indicator bundle out.

use tracing::debug;

use crate::common::math;
use crate::indicators::momentum::{
    calculate_momentum_default, calculate_roc_default, calculate_rsi_default,
    calculate_stochastic_default,
};
use crate::indicators::trend::{calculate_adx, calculate_macd_default, calculate_trend_signal};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::indicators::volume::calculate_volume_trend_default;
use crate::models::indicators::{Candle, IndicatorBundle};

/// Series length from which every lookback window (SMA200 included) is filled
pub const FULL_HISTORY: usize = 200;

/// Compute every indicator for `candles`.
///
/// Pure and total: short series degrade to placeholder readings instead of
/// failing, so the aggregator can always run on the result.
pub fn compute_indicators(candles: &[Candle]) -> IndicatorBundle {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let price = math::last(&closes);

    let sma20 = math::sma(&closes, 20);
    let sma50 = math::sma(&closes, 50);
    let sma200 = math::sma(&closes, 200);

    if candles.len() < FULL_HISTORY {
        debug!(
            candles = candles.len(),
            required = FULL_HISTORY,
            "Partial history; long windows fall back to the latest close"
        );
    }

    let bundle = IndicatorBundle {
        rsi: calculate_rsi_default(&closes),
        stochastic: calculate_stochastic_default(candles),
        momentum: calculate_momentum_default(&closes),
        roc: calculate_roc_default(&closes),
        macd: calculate_macd_default(&closes),
        adx: calculate_adx(sma20, sma50),
        sma20,
        sma50,
        sma200,
        trend_signal: calculate_trend_signal(price, sma20, sma50),
        bollinger: calculate_bollinger_bands_default(&closes),
        volume_trend: calculate_volume_trend_default(candles),
    };

    debug!(
        candles = candles.len(),
        price,
        rsi = %bundle.rsi.signal,
        macd = %bundle.macd.signal,
        trend = %bundle.trend_signal.signal,
        "Computed indicator bundle"
    );

    bundle
}
