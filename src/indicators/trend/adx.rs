//! ADX-style trend strength proxy

use crate::common::math;
use crate::models::indicators::IndicatorReading;
use crate::models::signal::SignalDirection;

/// Trend strength proxy on a 0-100 scale.
///
/// This is not Wilder's ADX: there is no true range or directional movement
/// smoothing. The value is the SMA20/SMA50 spread relative to SMA50, scaled
/// by 5000 and capped at 100. Always non-directional.
pub fn calculate_adx(sma20: f64, sma50: f64) -> IndicatorReading {
    let value = if sma50 != 0.0 {
        math::clamp_strength((sma20 - sma50).abs() / sma50.abs() * 1000.0 * 5.0)
    } else {
        0.0
    };

    let description = if value > 50.0 {
        "Very strong trend"
    } else if value > 25.0 {
        "Strong trend"
    } else {
        "Weak trend"
    };

    IndicatorReading::new(
        format!("{:.1}", value),
        SignalDirection::Neutral,
        description,
        value,
    )
}
