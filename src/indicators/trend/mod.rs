//! Trend indicators: MACD, ADX proxy, SMA trend

pub mod adx;
pub mod macd;
pub mod sma_trend;

pub use adx::*;
pub use macd::*;
pub use sma_trend::*;
