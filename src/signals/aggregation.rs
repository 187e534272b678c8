//! Directional vote aggregation

use tracing::debug;

use crate::indicators::registry::{Directional, TALLIED_INDICATORS};
use crate::models::indicators::IndicatorBundle;
use crate::models::signal::{AggregationResult, SignalDirection};
use crate::signals::regime::classify_regime;

/// Tally the directional indicators of `bundle` and classify the regime.
///
/// UP and DOWN votes add their strength to the matching score; NEUTRAL votes
/// are only counted.
pub fn aggregate(bundle: &IndicatorBundle) -> AggregationResult {
    let mut up_count = 0u32;
    let mut down_count = 0u32;
    let mut neutral_count = 0u32;
    let mut up_score = 0.0;
    let mut down_score = 0.0;

    for kind in TALLIED_INDICATORS {
        let reading = bundle.reading(kind);
        match reading.direction() {
            SignalDirection::Up => {
                up_count += 1;
                up_score += reading.strength();
            }
            SignalDirection::Down => {
                down_count += 1;
                down_score += reading.strength();
            }
            SignalDirection::Neutral => neutral_count += 1,
        }
    }

    let alignment = up_count.max(down_count) as f64 / TALLIED_INDICATORS.len() as f64 * 100.0;
    let market_regime = classify_regime(bundle);

    debug!(
        up = up_count,
        down = down_count,
        neutral = neutral_count,
        alignment,
        regime = %market_regime,
        "Aggregated indicator votes"
    );

    AggregationResult {
        up_count,
        down_count,
        neutral_count,
        up_score,
        down_score,
        alignment,
        market_regime,
    }
}
