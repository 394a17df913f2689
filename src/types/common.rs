//! Common domain types for the Spikex API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Limit order - price and quantity required
    Limit,
    /// Market order - sized by quantity, or by quote quantity for buys
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

/// Time in force for orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till canceled (default)
    #[default]
    GTC,
    /// Immediate or cancel
    IOC,
    /// Fill or kill
    FOK,
    /// Post only - rejected if it would take liquidity
    GTX,
}

/// Business line an order or transfer belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BizType {
    /// Spot trading (default)
    #[default]
    Spot,
    /// Leverage trading
    Lever,
    /// Finance / staking
    Finance,
    /// USDT-margined futures
    FuturesU,
    /// Coin-margined futures
    FuturesC,
}

impl std::fmt::Display for BizType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BizType::Spot => "SPOT",
            BizType::Lever => "LEVER",
            BizType::Finance => "FINANCE",
            BizType::FuturesU => "FUTURES_U",
            BizType::FuturesC => "FUTURES_C",
        };
        write!(f, "{}", s)
    }
}

/// Paging direction relative to `fromId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Records before `fromId`
    Prev,
    /// Records after `fromId`
    Next,
}

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Accepted, not yet on the book
    New,
    /// Partially filled
    PartiallyFilled,
    /// Completely filled
    Filled,
    /// Canceled by the user
    Canceled,
    /// Rejected by the platform
    Rejected,
    /// Expired (IOC/FOK leftovers)
    Expired,
}

/// Kline (candlestick) interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    /// 1 minute
    #[serde(rename = "1m")]
    Minute1,
    /// 3 minutes
    #[serde(rename = "3m")]
    Minute3,
    /// 5 minutes
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minutes
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minutes
    #[serde(rename = "30m")]
    Minute30,
    /// 1 hour
    #[serde(rename = "1h")]
    Hour1,
    /// 2 hours
    #[serde(rename = "2h")]
    Hour2,
    /// 4 hours
    #[serde(rename = "4h")]
    Hour4,
    /// 6 hours
    #[serde(rename = "6h")]
    Hour6,
    /// 8 hours
    #[serde(rename = "8h")]
    Hour8,
    /// 12 hours
    #[serde(rename = "12h")]
    Hour12,
    /// 1 day
    #[serde(rename = "1d")]
    Day1,
    /// 3 days
    #[serde(rename = "3d")]
    Day3,
    /// 1 week
    #[serde(rename = "1w")]
    Week1,
    /// 1 month
    #[serde(rename = "1M")]
    Month1,
}

impl KlineInterval {
    /// Wire representation, e.g. `"1h"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::Minute1 => "1m",
            KlineInterval::Minute3 => "3m",
            KlineInterval::Minute5 => "5m",
            KlineInterval::Minute15 => "15m",
            KlineInterval::Minute30 => "30m",
            KlineInterval::Hour1 => "1h",
            KlineInterval::Hour2 => "2h",
            KlineInterval::Hour4 => "4h",
            KlineInterval::Hour6 => "6h",
            KlineInterval::Hour8 => "8h",
            KlineInterval::Hour12 => "12h",
            KlineInterval::Day1 => "1d",
            KlineInterval::Day3 => "3d",
            KlineInterval::Week1 => "1w",
            KlineInterval::Month1 => "1M",
        }
    }
}

impl std::fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
