pub mod engine;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::*;
pub use registry::*;
