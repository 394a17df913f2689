//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use std::time::Duration;

use serde_json::Value;
use types::{BalanceQuery, BalancesQuery, BatchOrdersQuery, CancelOrdersBody};

use crate::auth::{HttpMethod, SystemClock, TimestampProvider};
use crate::error::SpikexError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::private;

/// Maximum number of order IDs fetched per batch detail request.
pub const BATCH_QUERY_LIMIT: usize = 150;

impl SpotRestClient {
    // ========== Orders ==========

    /// Get a single order by exchange or client order ID.
    pub async fn get_order(&self, query: &OrderQuery) -> Result<Order, SpikexError> {
        let query = query.to_query();
        self.private_request(HttpMethod::Get, private::ORDER, Some(&query), None)
            .await
    }

    /// Place a new order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use spikex_api_client::spot::rest::SpotRestClient;
    /// use spikex_api_client::spot::rest::private::PlaceOrderRequest;
    /// use spikex_api_client::auth::StaticCredentials;
    /// use spikex_api_client::types::Side;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build();
    ///
    ///     let order = PlaceOrderRequest::limit(
    ///         "btc_usdt",
    ///         Side::Buy,
    ///         Decimal::new(20000, 0),
    ///         Decimal::new(1, 3),
    ///     )
    ///     .client_order_id("my-order-1");
    ///     let response = client.place_order(&order).await?;
    ///     println!("Order ID: {}", response.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, SpikexError> {
        let order = request.normalized()?;
        self.private_post(private::ORDER, Some(&order)).await
    }

    /// Cancel a single order.
    pub async fn cancel_order(&self, order_id: &str) -> Result<CancelOrderResponse, SpikexError> {
        let path = private::order_by_id(order_id)?;
        self.private_delete::<_, ()>(&path, None).await
    }

    /// Get open orders.
    pub async fn get_open_orders(
        &self,
        request: &OpenOrdersRequest,
    ) -> Result<Vec<Order>, SpikexError> {
        self.private_get(private::OPEN_ORDER, request).await
    }

    /// Cancel all open orders matching the filter.
    pub async fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> Result<Value, SpikexError> {
        self.private_delete(private::OPEN_ORDER, Some(request)).await
    }

    /// Cancel several orders by ID.
    pub async fn cancel_orders(&self, order_ids: &[String]) -> Result<Value, SpikexError> {
        let body = CancelOrdersBody { order_ids };
        self.private_delete(private::BATCH_ORDER, Some(&body)).await
    }

    /// Place several orders in one request.
    pub async fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<Vec<BatchOrderResult>, SpikexError> {
        let batch = request.normalized()?;
        self.private_post(private::BATCH_ORDER, Some(&batch)).await
    }

    /// Get details of several orders by ID.
    ///
    /// Keep `order_ids` at or below [`BATCH_QUERY_LIMIT`]; the IDs travel in the query string.
    /// An empty list returns an empty result without a request.
    pub async fn get_batch_orders(&self, order_ids: &[String]) -> Result<Vec<Order>, SpikexError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = BatchOrdersQuery {
            order_ids: order_ids.iter().map(String::as_str).collect(),
        };
        self.private_get(private::BATCH_ORDER, &query).await
    }

    /// Get full details of every open order, optionally for one pair.
    ///
    /// Lists open orders, then fetches their details in pages of [`BATCH_QUERY_LIMIT`].
    pub async fn get_all_open_order_details(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<Order>, SpikexError> {
        let request = OpenOrdersRequest {
            symbol: symbol.map(str::to_string),
            ..OpenOrdersRequest::default()
        };
        let order_ids: Vec<String> = self
            .get_open_orders(&request)
            .await?
            .into_iter()
            .map(|order| order.order_id)
            .collect();

        let mut orders = Vec::with_capacity(order_ids.len());
        for chunk in order_ids.chunks(BATCH_QUERY_LIMIT) {
            orders.extend(self.get_batch_orders(chunk).await?);
        }
        Ok(orders)
    }

    /// Query historical orders.
    pub async fn get_history_orders(
        &self,
        request: &HistoryOrdersRequest,
    ) -> Result<Page<Order>, SpikexError> {
        self.private_get(private::HISTORY_ORDER, request).await
    }

    /// Query own trades.
    pub async fn get_trades(&self, request: &TradesRequest) -> Result<Page<AccountTrade>, SpikexError> {
        self.private_get(private::TRADE, request).await
    }

    // ========== Assets ==========

    /// Get the balance of one currency.
    pub async fn get_balance(&self, currency: &str) -> Result<Balance, SpikexError> {
        self.private_get(private::BALANCE, &BalanceQuery { currency })
            .await
    }

    /// Get balances of several currencies, or of all when `currencies` is empty.
    pub async fn get_balances(&self, currencies: &[&str]) -> Result<Balances, SpikexError> {
        let query = BalancesQuery {
            currencies: (!currencies.is_empty()).then(|| currencies.to_vec()),
        };
        self.private_get(private::BALANCES, &query).await
    }

    /// Move funds between business accounts.
    ///
    /// `biz_id` defaults to the current epoch milliseconds.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferId, SpikexError> {
        let mut request = request.clone();
        if request.biz_id.is_none() {
            request.biz_id = Some(SystemClock::with_skew(Duration::ZERO).timestamp_millis());
        }
        self.private_post(private::BALANCE_TRANSFER, Some(&request))
            .await
    }

    // ========== WebSocket ==========

    /// Get a listen key for the private WebSocket stream.
    pub async fn get_listen_key(&self) -> Result<ListenKey, SpikexError> {
        self.private_post::<_, ()>(private::WS_TOKEN, None).await
    }
}
