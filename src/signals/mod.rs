//! Signal aggregation and regime classification.

pub mod aggregation;
pub mod regime;

pub use aggregation::*;
pub use regime::*;
