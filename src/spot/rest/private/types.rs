//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::QueryParams;
use crate::error::SpikexError;
use crate::types::serde_helpers::{comma_separated, comma_separated_opt, string_or_number};
use crate::types::{BizType, Direction, OrderState, OrderType, Side, TimeInForce};

/// Identifies a single order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    /// By exchange order ID.
    OrderId(String),
    /// By client-assigned order ID.
    ClientOrderId(String),
}

impl OrderQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        match self {
            OrderQuery::OrderId(id) => QueryParams::new().with("orderId", id.as_str()),
            OrderQuery::ClientOrderId(id) => QueryParams::new().with("clientOrderId", id.as_str()),
        }
    }
}

/// Request to place a single order.
///
/// Field order is the order of keys in the signed JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Trading pair, e.g. `btc_usdt`.
    pub symbol: String,
    /// Client order ID, at most 32 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Order side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Business line.
    pub biz_type: BizType,
    /// Limit price. Required for limit orders.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize"
    )]
    pub price: Option<Decimal>,
    /// Base quantity.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize"
    )]
    pub quantity: Option<Decimal>,
    /// Quote amount, for market buys sized by amount.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize"
    )]
    pub quote_qty: Option<Decimal>,
}

impl PlaceOrderRequest {
    fn base(symbol: impl Into<String>, side: Side, order_type: OrderType) -> Self {
        Self {
            symbol: symbol.into(),
            client_order_id: None,
            side,
            order_type,
            time_in_force: TimeInForce::GTC,
            biz_type: BizType::Spot,
            price: None,
            quantity: None,
            quote_qty: None,
        }
    }

    /// Limit order for `quantity` at `price`.
    pub fn limit(symbol: impl Into<String>, side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            price: Some(price),
            quantity: Some(quantity),
            ..Self::base(symbol, side, OrderType::Limit)
        }
    }

    /// Market order for a base `quantity`.
    ///
    /// A market buy sized in base units needs a reference [`price`](Self::price) so the
    /// quantity can be converted to a quote amount.
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::base(symbol, side, OrderType::Market)
        }
    }

    /// Market buy spending `quote_qty` of the quote currency.
    pub fn market_buy_quote(symbol: impl Into<String>, quote_qty: Decimal) -> Self {
        Self {
            quote_qty: Some(quote_qty),
            ..Self::base(symbol, Side::Buy, OrderType::Market)
        }
    }

    /// Set the client order ID.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Set the business line.
    pub fn biz_type(mut self, biz_type: BizType) -> Self {
        self.biz_type = biz_type;
        self
    }

    /// Set the price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Resolve the order into the form the exchange accepts.
    ///
    /// Market buys are sized by quote amount: a market buy given only a base
    /// quantity is converted to `quote_qty = quantity * price`.
    pub fn normalized(&self) -> Result<Self, SpikexError> {
        let mut order = self.clone();
        let sized_by_quantity = order.order_type == OrderType::Market
            && order.side == Side::Buy
            && order.quote_qty.is_none();

        if sized_by_quantity {
            if let Some(quantity) = order.quantity.take() {
                let price = order.price.ok_or_else(|| {
                    SpikexError::InvalidRequest(
                        "market buy sized by quantity requires a price".to_string(),
                    )
                })?;
                let quote_qty = quantity.checked_mul(price).ok_or_else(|| {
                    SpikexError::InvalidRequest("market buy quote amount overflows".to_string())
                })?;
                order.quote_qty = Some(quote_qty);
            }
        }

        if order.order_type == OrderType::Limit && (order.price.is_none() || order.quantity.is_none())
        {
            return Err(SpikexError::InvalidRequest(
                "limit order requires price and quantity".to_string(),
            ));
        }
        Ok(order)
    }
}

/// Place order response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    /// Exchange order ID.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub order_id: String,
}

/// Request to place up to 100 orders at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderRequest {
    /// Client batch ID.
    pub client_batch_id: Option<String>,
    /// Orders to place.
    pub items: Vec<PlaceOrderRequest>,
}

impl BatchOrderRequest {
    /// Create a batch without a client batch ID.
    pub fn new(items: Vec<PlaceOrderRequest>) -> Self {
        Self {
            client_batch_id: None,
            items,
        }
    }

    /// Set the client batch ID.
    pub fn client_batch_id(mut self, id: impl Into<String>) -> Self {
        self.client_batch_id = Some(id.into());
        self
    }

    pub(crate) fn normalized(&self) -> Result<Self, SpikexError> {
        Ok(Self {
            client_batch_id: self.client_batch_id.clone(),
            items: self
                .items
                .iter()
                .map(PlaceOrderRequest::normalized)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Outcome of one order in a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderResult {
    /// Position in the submitted batch.
    pub index: u32,
    /// Client order ID.
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// Exchange order ID, if accepted.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Whether the order was rejected.
    pub rejected: bool,
    /// Rejection reason.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Cancel order response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    /// Cancellation request ID.
    #[serde(default)]
    pub cancel_id: Option<String>,
}

/// Request for open orders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersRequest {
    /// Restrict to a trading pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Restrict to a business line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<BizType>,
    /// Restrict to a side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl OpenOrdersRequest {
    /// Open orders for one trading pair.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }
}

/// Request to cancel all matching open orders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOpenOrdersRequest {
    /// Business line (default SPOT).
    pub biz_type: BizType,
    /// Restrict to a trading pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Restrict to a side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CancelOrdersBody<'a> {
    pub order_ids: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchOrdersQuery<'a> {
    #[serde(serialize_with = "comma_separated::serialize")]
    pub order_ids: Vec<&'a str>,
}

/// Order details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Trading pair.
    pub symbol: String,
    /// Exchange order ID.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub order_id: String,
    /// Client order ID.
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// Base currency.
    #[serde(default)]
    pub base_currency: Option<String>,
    /// Quote currency.
    #[serde(default)]
    pub quote_currency: Option<String>,
    /// Order side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force.
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Original base quantity.
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    /// Original quote amount.
    #[serde(default)]
    pub orig_quote_qty: Option<Decimal>,
    /// Filled base quantity.
    #[serde(default)]
    pub executed_qty: Option<Decimal>,
    /// Remaining base quantity.
    #[serde(default)]
    pub leaving_qty: Option<Decimal>,
    /// Filled base amount.
    #[serde(default)]
    pub trade_base: Option<Decimal>,
    /// Filled quote amount.
    #[serde(default)]
    pub trade_quote: Option<Decimal>,
    /// Average fill price.
    #[serde(default)]
    pub avg_price: Option<Decimal>,
    /// Fee paid.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Fee currency.
    #[serde(default)]
    pub fee_currency: Option<String>,
    /// Order state.
    pub state: OrderState,
    /// Creation time, epoch milliseconds.
    pub time: u64,
    /// Last update time, epoch milliseconds.
    #[serde(rename = "updatedTime", default)]
    pub update_time: Option<u64>,
}

/// Request for historical orders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOrdersRequest {
    /// Trading pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Business line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<BizType>,
    /// Order side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Order type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Exchange order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Order ID to page from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    /// Paging direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Exclude canceled orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_canceled: Option<bool>,
}

/// A page of records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Earlier records exist.
    #[serde(default)]
    pub has_prev: bool,
    /// Later records exist.
    #[serde(default)]
    pub has_next: bool,
    /// Records in this page.
    pub items: Vec<T>,
}

/// Request for own trades.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesRequest {
    /// Trading pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Business line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<BizType>,
    /// Order side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Order type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Restrict to one order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Trade ID to page from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    /// Paging direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Page size (default 20).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

/// Maker or taker role in a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TakerMaker {
    /// Took liquidity
    Taker,
    /// Provided liquidity
    Maker,
}

/// One of the account's fills.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrade {
    /// Trading pair.
    pub symbol: String,
    /// Trade ID.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub trade_id: String,
    /// Order ID.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub order_id: String,
    /// Order side.
    pub order_side: Side,
    /// Order type.
    pub order_type: OrderType,
    /// Business line.
    pub biz_type: BizType,
    /// Fill time, epoch milliseconds.
    pub time: u64,
    /// Fill price.
    pub price: Decimal,
    /// Base quantity.
    pub quantity: Decimal,
    /// Quote amount.
    pub quote_qty: Decimal,
    /// Base currency.
    pub base_currency: String,
    /// Quote currency.
    pub quote_currency: String,
    /// Fee.
    pub fee: Decimal,
    /// Fee currency.
    pub fee_currency: String,
    /// Maker or taker.
    pub taker_maker: TakerMaker,
}

/// Balance of one currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Currency name.
    pub currency: String,
    /// Numeric currency identifier.
    #[serde(default)]
    pub currency_id: Option<u64>,
    /// Amount available for trading.
    pub available_amount: Decimal,
    /// Amount locked in orders.
    pub frozen_amount: Decimal,
    /// Total amount.
    pub total_amount: Decimal,
    /// Total amount valued in BTC.
    #[serde(default)]
    pub convert_btc_amount: Option<Decimal>,
}

/// Balances of several currencies.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    /// Total valued in BTC.
    #[serde(default)]
    pub total_btc_amount: Option<Decimal>,
    /// Per-currency balances.
    pub assets: Vec<Balance>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BalanceQuery<'a> {
    pub currency: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct BalancesQuery<'a> {
    #[serde(serialize_with = "comma_separated_opt::serialize")]
    pub currencies: Option<Vec<&'a str>>,
}

/// Listen key for the private WebSocket stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKey {
    /// Token to subscribe with.
    pub access_token: String,
}

/// Request to move funds between business accounts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Idempotency ID. Filled with the current epoch milliseconds when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_id: Option<u64>,
    /// Source account.
    pub from: BizType,
    /// Destination account.
    pub to: BizType,
    /// Currency, lowercase (e.g. `usdt`).
    pub currency: String,
    /// Amount to move.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
}

impl TransferRequest {
    /// Create a transfer request.
    pub fn new(from: BizType, to: BizType, currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            biz_id: None,
            from,
            to,
            currency: currency.into().to_lowercase(),
            amount,
        }
    }

    /// Set the idempotency ID.
    pub fn biz_id(mut self, biz_id: u64) -> Self {
        self.biz_id = Some(biz_id);
        self
    }
}

/// Transfer ID returned by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TransferId(#[serde(deserialize_with = "string_or_number::deserialize")] pub String);
