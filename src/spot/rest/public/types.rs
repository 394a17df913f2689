//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{Direction, KlineInterval};

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Epoch milliseconds.
    pub server_time: u64,
}

/// Select one trading pair, several, or all of them.
///
/// Used by the symbol configuration and ticker endpoints.
#[derive(Debug, Clone, Default)]
pub struct SymbolFilter {
    /// Single trading pair, e.g. `btc_usdt`.
    pub symbol: Option<String>,
    /// Several trading pairs; ignored when `symbol` is set.
    pub symbols: Option<Vec<String>>,
}

// At most one of `symbol` and `symbols` reaches the query.
impl Serialize for SymbolFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let symbols = match (&self.symbol, &self.symbols) {
            (None, Some(symbols)) if !symbols.is_empty() => Some(symbols.join(",")),
            _ => None,
        };

        let mut state = serializer.serialize_struct("SymbolFilter", 2)?;
        match &self.symbol {
            Some(symbol) => state.serialize_field("symbol", symbol)?,
            None => state.skip_field("symbol")?,
        }
        match &symbols {
            Some(symbols) => state.serialize_field("symbols", symbols)?,
            None => state.skip_field("symbols")?,
        }
        state.end()
    }
}

impl SymbolFilter {
    /// All trading pairs.
    pub fn all() -> Self {
        Self::default()
    }

    /// A single trading pair.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            symbols: None,
        }
    }

    /// Several trading pairs.
    pub fn symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: None,
            symbols: Some(symbols.into_iter().map(Into::into).collect()),
        }
    }
}

/// Trading pair configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading pair name.
    pub symbol: String,
    /// Numeric identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Pair state, e.g. `ONLINE`.
    #[serde(default)]
    pub state: Option<String>,
    /// Whether trading is enabled.
    #[serde(default)]
    pub trading_enabled: Option<bool>,
    /// Base currency.
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Base currency precision.
    #[serde(default)]
    pub base_currency_precision: Option<u32>,
    /// Quote currency.
    #[serde(default)]
    pub quote_currency: Option<String>,
    /// Quote currency precision.
    #[serde(default)]
    pub quote_currency_precision: Option<u32>,
    /// Price precision.
    #[serde(default)]
    pub price_precision: Option<u32>,
    /// Quantity precision.
    #[serde(default)]
    pub quantity_precision: Option<u32>,
    /// Supported order types.
    #[serde(default)]
    pub order_types: Vec<String>,
    /// Supported time-in-force values.
    #[serde(default)]
    pub time_in_forces: Vec<String>,
    /// Price, quantity and amount filters.
    #[serde(default)]
    pub filters: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SymbolList {
    pub symbols: Vec<SymbolInfo>,
}

/// Request parameters for order book depth.
#[derive(Debug, Clone, Serialize)]
pub struct DepthRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of levels, 1-500 (default 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl DepthRequest {
    /// Create a depth request with the default level count.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the number of levels.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One order book level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceLevel(pub Decimal, pub Decimal);

impl PriceLevel {
    /// Level price.
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Quantity at this level.
    pub fn quantity(&self) -> Decimal {
        self.1
    }
}

/// Order book depth.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depth {
    /// Snapshot time, epoch milliseconds.
    pub timestamp: u64,
    /// Last update identifier.
    pub last_update_id: u64,
    /// Bids, best first.
    pub bids: Vec<PriceLevel>,
    /// Asks, best first.
    pub asks: Vec<PriceLevel>,
}

/// Request parameters for kline data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineRequest {
    /// Trading pair.
    pub symbol: String,
    /// Candle interval.
    pub interval: KlineInterval,
    /// Start time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Maximum number of candles (default 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl KlineRequest {
    /// Create a kline request returning the latest 100 candles.
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            start_time: None,
            end_time: None,
            limit: Some(100),
        }
    }

    /// Restrict to a time range.
    pub fn range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Set the maximum number of candles.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A single candle.
#[derive(Debug, Clone, Deserialize)]
pub struct Kline {
    /// Open time, epoch milliseconds.
    #[serde(rename = "t")]
    pub open_time: u64,
    /// Open price.
    #[serde(rename = "o")]
    pub open: Decimal,
    /// Close price.
    #[serde(rename = "c")]
    pub close: Decimal,
    /// High price.
    #[serde(rename = "h")]
    pub high: Decimal,
    /// Low price.
    #[serde(rename = "l")]
    pub low: Decimal,
    /// Traded base quantity.
    #[serde(rename = "q")]
    pub quantity: Decimal,
    /// Traded quote volume.
    #[serde(rename = "v")]
    pub volume: Decimal,
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Serialize)]
pub struct RecentTradesRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of trades, 1-1000 (default 200).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RecentTradesRequest {
    /// Create a recent trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request parameters for historical trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryRequest {
    /// Trading pair.
    pub symbol: String,
    /// Paging direction relative to `from_id`.
    pub direction: Direction,
    /// Number of trades, 1-1000 (default 200).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Trade ID to page from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
}

impl TradeHistoryRequest {
    /// Create a historical trades request.
    pub fn new(symbol: impl Into<String>, direction: Direction) -> Self {
        Self {
            symbol: symbol.into(),
            direction,
            limit: None,
            from_id: None,
        }
    }

    /// Page from the given trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A public trade.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicTrade {
    /// Trade ID.
    #[serde(rename = "i")]
    pub id: u64,
    /// Trade time, epoch milliseconds.
    #[serde(rename = "t")]
    pub time: u64,
    /// Price.
    #[serde(rename = "p")]
    pub price: Decimal,
    /// Base quantity.
    #[serde(rename = "q")]
    pub quantity: Decimal,
    /// Quote volume.
    #[serde(rename = "v")]
    pub volume: Decimal,
    /// Whether the buyer was the maker.
    #[serde(rename = "b")]
    pub buyer_maker: bool,
}

/// Latest price of a trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceTicker {
    /// Trading pair.
    #[serde(rename = "s")]
    pub symbol: String,
    /// Last price.
    #[serde(rename = "p")]
    pub price: Decimal,
    /// Time, epoch milliseconds.
    #[serde(rename = "t")]
    pub time: u64,
}

/// Best bid and ask of a trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct BookTicker {
    /// Trading pair.
    #[serde(rename = "s")]
    pub symbol: String,
    /// Best ask price.
    #[serde(rename = "ap", default)]
    pub ask_price: Option<Decimal>,
    /// Best ask quantity.
    #[serde(rename = "aq", default)]
    pub ask_quantity: Option<Decimal>,
    /// Best bid price.
    #[serde(rename = "bp", default)]
    pub bid_price: Option<Decimal>,
    /// Best bid quantity.
    #[serde(rename = "bq", default)]
    pub bid_quantity: Option<Decimal>,
}

/// 24 hour rolling statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker24h {
    /// Trading pair.
    #[serde(rename = "s")]
    pub symbol: String,
    /// Absolute price change.
    #[serde(rename = "cv")]
    pub change_value: Decimal,
    /// Price change in percent.
    #[serde(rename = "cr")]
    pub change_rate: Decimal,
    /// First trade price.
    #[serde(rename = "o")]
    pub open: Decimal,
    /// Low price.
    #[serde(rename = "l")]
    pub low: Decimal,
    /// High price.
    #[serde(rename = "h")]
    pub high: Decimal,
    /// Last trade price.
    #[serde(rename = "c")]
    pub close: Decimal,
    /// Base quantity traded.
    #[serde(rename = "q")]
    pub quantity: Decimal,
    /// Quote volume traded.
    #[serde(rename = "v")]
    pub volume: Decimal,
}

/// Currency information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Currency name, lowercase.
    pub currency: String,
    /// Numeric identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// Maximum precision.
    #[serde(default)]
    pub max_precision: Option<u32>,
    /// Deposit availability.
    #[serde(default)]
    pub deposit_status: Option<i32>,
    /// Withdrawal availability.
    #[serde(default)]
    pub withdraw_status: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrencyList {
    pub currencies: Vec<CurrencyInfo>,
}
