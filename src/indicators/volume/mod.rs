//! Volume indicators

pub mod volume_trend;

pub use volume_trend::*;
