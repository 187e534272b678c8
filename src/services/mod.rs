//! External collaborators: market data and narrative generation

pub mod cryptocompare;
pub mod market_data;
pub mod narrative;

pub use cryptocompare::CryptoCompareProvider;
pub use market_data::{MarketDataError, MarketDataProvider, StaticMarketDataProvider};
pub use narrative::{parse_verdict, FallbackNarrator, NarrativeError, NarrativeGenerator};
