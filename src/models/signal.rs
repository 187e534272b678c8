use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-way directional call shared by every reading and by the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Up,
    Down,
    Neutral,
}

impl SignalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Up => "UP",
            SignalDirection::Down => "DOWN",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market character, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketRegime {
    Trending,
    Volatile,
    Ranging,
}

impl MarketRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketRegime::Trending => "TRENDING",
            MarketRegime::Volatile => "VOLATILE",
            MarketRegime::Ranging => "RANGING",
        }
    }
}

impl fmt::Display for MarketRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub up_count: u32,
    pub down_count: u32,
    pub neutral_count: u32,
    pub up_score: f64,
    pub down_score: f64,
    /// Share of tallied indicators agreeing with the dominant direction, 0..=100
    pub alignment: f64,
    pub market_regime: MarketRegime,
}

impl AggregationResult {
    pub fn total(&self) -> u32 {
        self.up_count + self.down_count + self.neutral_count
    }

    /// Direction with the most votes; ties resolve to neutral
    pub fn dominant_direction(&self) -> SignalDirection {
        if self.up_count > self.down_count {
            SignalDirection::Up
        } else if self.down_count > self.up_count {
            SignalDirection::Down
        } else {
            SignalDirection::Neutral
        }
    }
}
