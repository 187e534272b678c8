//! Static market catalogue: tradable pairs and analysis timeframes

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetClass {
    Crypto,
    Forex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketPair {
    pub symbol: &'static str,
    pub base: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
}

/// Candle granularity endpoint on the upstream history API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Histominute,
    Histohour,
    Histoday,
}

impl Granularity {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Granularity::Histominute => "histominute",
            Granularity::Histohour => "histohour",
            Granularity::Histoday => "histoday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradingStyle {
    Scalp,
    Day,
    Swing,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    pub label: &'static str,
    pub value: &'static str,
    /// Number of candles requested
    pub limit: u32,
    #[serde(rename = "apiValue")]
    pub granularity: Granularity,
    /// Buckets of `granularity` merged into one candle
    pub aggregate: u32,
    pub category: TradingStyle,
}

const fn crypto(
    symbol: &'static str,
    base: &'static str,
    name: &'static str,
) -> MarketPair {
    MarketPair {
        symbol,
        base,
        quote: "USDT",
        name,
        asset_class: AssetClass::Crypto,
    }
}

const fn forex(
    symbol: &'static str,
    base: &'static str,
    quote: &'static str,
    name: &'static str,
) -> MarketPair {
    MarketPair {
        symbol,
        base,
        quote,
        name,
        asset_class: AssetClass::Forex,
    }
}

pub const SUPPORTED_PAIRS: &[MarketPair] = &[
    // Majors
    crypto("BTC/USDT", "BTC", "Bitcoin"),
    crypto("ETH/USDT", "ETH", "Ethereum"),
    crypto("BNB/USDT", "BNB", "Binance Coin"),
    crypto("SOL/USDT", "SOL", "Solana"),
    crypto("XRP/USDT", "XRP", "Ripple"),
    crypto("ADA/USDT", "ADA", "Cardano"),
    crypto("AVAX/USDT", "AVAX", "Avalanche"),
    crypto("DOT/USDT", "DOT", "Polkadot"),
    crypto("TRX/USDT", "TRX", "Tron"),
    crypto("LINK/USDT", "LINK", "Chainlink"),
    // AI & DePIN
    crypto("TAO/USDT", "TAO", "Bittensor"),
    crypto("FET/USDT", "FET", "Fetch.ai"),
    crypto("RNDR/USDT", "RNDR", "Render"),
    crypto("WLD/USDT", "WLD", "Worldcoin"),
    crypto("GRT/USDT", "GRT", "The Graph"),
    // Layer 1 & 2
    crypto("SUI/USDT", "SUI", "Sui"),
    crypto("SEI/USDT", "SEI", "Sei"),
    crypto("APT/USDT", "APT", "Aptos"),
    crypto("OP/USDT", "OP", "Optimism"),
    crypto("ARB/USDT", "ARB", "Arbitrum"),
    crypto("MATIC/USDT", "MATIC", "Polygon"),
    crypto("NEAR/USDT", "NEAR", "Near Protocol"),
    crypto("INJ/USDT", "INJ", "Injective"),
    crypto("TIA/USDT", "TIA", "Celestia"),
    crypto("ATOM/USDT", "ATOM", "Cosmos"),
    crypto("FTM/USDT", "FTM", "Fantom"),
    crypto("ALGO/USDT", "ALGO", "Algorand"),
    crypto("HBAR/USDT", "HBAR", "Hedera"),
    crypto("EGLD/USDT", "EGLD", "MultiversX"),
    crypto("ICP/USDT", "ICP", "Internet Computer"),
    crypto("STX/USDT", "STX", "Stacks"),
    crypto("IMX/USDT", "IMX", "Immutable"),
    // DeFi & utility
    crypto("UNI/USDT", "UNI", "Uniswap"),
    crypto("AAVE/USDT", "AAVE", "Aave"),
    crypto("MKR/USDT", "MKR", "Maker"),
    crypto("SNX/USDT", "SNX", "Synthetix"),
    crypto("LDO/USDT", "LDO", "Lido DAO"),
    crypto("RUNE/USDT", "RUNE", "THORChain"),
    crypto("JUP/USDT", "JUP", "Jupiter"),
    crypto("PYTH/USDT", "PYTH", "Pyth Network"),
    crypto("ONDO/USDT", "ONDO", "Ondo"),
    crypto("ENA/USDT", "ENA", "Ethena"),
    crypto("PENDLE/USDT", "PENDLE", "Pendle"),
    // Meme & speculative
    crypto("DOGE/USDT", "DOGE", "Dogecoin"),
    crypto("SHIB/USDT", "SHIB", "Shiba Inu"),
    crypto("PEPE/USDT", "PEPE", "Pepe"),
    crypto("WIF/USDT", "WIF", "dogwifhat"),
    crypto("BONK/USDT", "BONK", "Bonk"),
    crypto("FLOKI/USDT", "FLOKI", "Floki"),
    crypto("MEME/USDT", "MEME", "Memecoin"),
    crypto("BOME/USDT", "BOME", "Book of Meme"),
    crypto("ORDI/USDT", "ORDI", "Ordinals"),
    // Legacy & privacy
    crypto("LTC/USDT", "LTC", "Litecoin"),
    crypto("BCH/USDT", "BCH", "Bitcoin Cash"),
    crypto("XLM/USDT", "XLM", "Stellar"),
    crypto("ETC/USDT", "ETC", "Ethereum Classic"),
    crypto("EOS/USDT", "EOS", "EOS"),
    crypto("DASH/USDT", "DASH", "Dash"),
    // Forex
    forex("EUR/USD", "EUR", "USD", "Euro"),
    forex("GBP/USD", "GBP", "USD", "British Pound"),
    forex("AUD/USD", "AUD", "USD", "Aus Dollar"),
    forex("JPY/USD", "JPY", "USD", "Japanese Yen"),
    forex("USD/CAD", "USD", "CAD", "Canadian Dollar"),
    forex("USD/CHF", "USD", "CHF", "Swiss Franc"),
];

const fn timeframe(
    label: &'static str,
    value: &'static str,
    limit: u32,
    granularity: Granularity,
    aggregate: u32,
    category: TradingStyle,
) -> Timeframe {
    Timeframe {
        label,
        value,
        limit,
        granularity,
        aggregate,
        category,
    }
}

use Granularity::{Histoday, Histohour, Histominute};
use TradingStyle::{Day, Position, Scalp, Swing};

pub const TIMEFRAMES: &[Timeframe] = &[
    // 30s is served from 1m buckets with a shorter window
    timeframe("30 Sec", "30s", 60, Histominute, 1, Scalp),
    timeframe("1 Min", "1m", 200, Histominute, 1, Scalp),
    timeframe("3 Min", "3m", 200, Histominute, 3, Scalp),
    timeframe("5 Min", "5m", 200, Histominute, 5, Scalp),
    timeframe("15 Min", "15m", 200, Histominute, 15, Day),
    timeframe("30 Min", "30m", 200, Histominute, 30, Day),
    timeframe("1 Hour", "1h", 200, Histohour, 1, Day),
    timeframe("2 Hours", "2h", 200, Histohour, 2, Swing),
    timeframe("4 Hours", "4h", 200, Histohour, 4, Swing),
    timeframe("8 Hours", "8h", 200, Histohour, 8, Swing),
    timeframe("12 Hours", "12h", 200, Histohour, 12, Swing),
    timeframe("1 Day", "1d", 200, Histoday, 1, Swing),
    timeframe("3 Days", "3d", 200, Histoday, 3, Position),
    timeframe("1 Week", "1w", 200, Histoday, 7, Position),
];

pub fn find_pair(symbol: &str) -> Option<&'static MarketPair> {
    SUPPORTED_PAIRS
        .iter()
        .find(|pair| pair.symbol.eq_ignore_ascii_case(symbol))
}

pub fn find_pair_by_assets(base: &str, quote: &str) -> Option<&'static MarketPair> {
    SUPPORTED_PAIRS
        .iter()
        .find(|pair| pair.base.eq_ignore_ascii_case(base) && pair.quote.eq_ignore_ascii_case(quote))
}

pub fn find_timeframe(value: &str) -> Option<&'static Timeframe> {
    TIMEFRAMES.iter().find(|tf| tf.value == value)
}
