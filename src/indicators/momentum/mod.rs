//! Momentum indicators: RSI, Stochastic, Momentum, ROC

pub mod price_momentum;
pub mod roc;
pub mod rsi;
pub mod stochastic;

pub use price_momentum::*;
pub use roc::*;
pub use rsi::*;
pub use stochastic::*;
