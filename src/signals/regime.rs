//! Market regime classification

use crate::models::indicators::IndicatorBundle;
use crate::models::signal::MarketRegime;

/// ADX proxy value above which the market counts as trending
pub const TRENDING_ADX: f64 = 25.0;
/// Bollinger width (percent of price) above which the market counts as volatile
pub const VOLATILE_WIDTH: f64 = 3.0;

/// Classify market character from the ADX proxy and Bollinger width.
///
/// Both indicators are excluded from the directional tally; here they only
/// describe how the market moves, not where.
pub fn classify_regime(bundle: &IndicatorBundle) -> MarketRegime {
    let adx = bundle.adx.value.as_f64().unwrap_or(0.0);
    if adx > TRENDING_ADX {
        MarketRegime::Trending
    } else if bundle.bollinger.width > VOLATILE_WIDTH {
        MarketRegime::Volatile
    } else {
        MarketRegime::Ranging
    }
}
