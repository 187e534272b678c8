//! Signalix signal engine: technical indicators over OHLC candles, directional
//! vote aggregation and market regime classification, plus the HTTP and
//! market-data shell around them.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use indicators::engine::compute_indicators;
pub use signals::aggregation::aggregate;
