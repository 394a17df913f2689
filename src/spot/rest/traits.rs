//! Trait definition for the Spikex REST API client.
//!
//! This module provides the `SpikexClient` trait which abstracts all REST API operations,
//! so callers can swap in mocks or wrap the client in decorators.
//!
//! # Example
//!
//! ```rust,ignore
//! use spikex_api_client::spot::rest::{SpikexClient, SpotRestClient};
//!
//! async fn check_clock<C: SpikexClient>(client: &C) -> Result<(), spikex_api_client::SpikexError> {
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.server_time);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::SpikexError;
use crate::spot::rest::private::{
    AccountTrade, Balance, Balances, BatchOrderRequest, BatchOrderResult, CancelOpenOrdersRequest,
    CancelOrderResponse, HistoryOrdersRequest, ListenKey, OpenOrdersRequest, Order, OrderQuery,
    Page, PlaceOrderRequest, PlaceOrderResponse, TradesRequest, TransferId, TransferRequest,
};
use crate::spot::rest::public::{
    BookTicker, CurrencyInfo, Depth, DepthRequest, Kline, KlineRequest, PriceTicker, PublicTrade,
    RecentTradesRequest, ServerTime, SymbolFilter, SymbolInfo, Ticker24h, TradeHistoryRequest,
};

/// Trait defining all Spikex spot REST API operations.
///
/// All methods are async and return `Result<T, SpikexError>`.
pub trait SpikexClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the server time.
    fn get_server_time(&self) -> impl Future<Output = Result<ServerTime, SpikexError>> + Send;

    /// Get trading pair configuration.
    fn get_symbols(
        &self,
        filter: &SymbolFilter,
    ) -> impl Future<Output = Result<Vec<SymbolInfo>, SpikexError>> + Send;

    /// Get order book depth.
    fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> impl Future<Output = Result<Depth, SpikexError>> + Send;

    /// Get kline data.
    fn get_klines(
        &self,
        request: &KlineRequest,
    ) -> impl Future<Output = Result<Vec<Kline>, SpikexError>> + Send;

    /// Get recent public trades.
    fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> impl Future<Output = Result<Vec<PublicTrade>, SpikexError>> + Send;

    /// Get historical public trades.
    fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> impl Future<Output = Result<Vec<PublicTrade>, SpikexError>> + Send;

    /// Get latest prices.
    fn get_tickers(
        &self,
        filter: &SymbolFilter,
    ) -> impl Future<Output = Result<Vec<PriceTicker>, SpikexError>> + Send;

    /// Get best bid and ask.
    fn get_book_tickers(
        &self,
        filter: &SymbolFilter,
    ) -> impl Future<Output = Result<Vec<BookTicker>, SpikexError>> + Send;

    /// Get 24 hour statistics.
    fn get_tickers_24h(
        &self,
        filter: &SymbolFilter,
    ) -> impl Future<Output = Result<Vec<Ticker24h>, SpikexError>> + Send;

    /// Get currency information.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<CurrencyInfo>, SpikexError>> + Send;

    // ========== Private Endpoints - Orders ==========

    /// Get a single order.
    fn get_order(
        &self,
        query: &OrderQuery,
    ) -> impl Future<Output = Result<Order, SpikexError>> + Send;

    /// Place a new order.
    fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> impl Future<Output = Result<PlaceOrderResponse, SpikexError>> + Send;

    /// Cancel a single order.
    fn cancel_order(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<CancelOrderResponse, SpikexError>> + Send;

    /// Get open orders.
    fn get_open_orders(
        &self,
        request: &OpenOrdersRequest,
    ) -> impl Future<Output = Result<Vec<Order>, SpikexError>> + Send;

    /// Cancel all matching open orders.
    fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> impl Future<Output = Result<Value, SpikexError>> + Send;

    /// Cancel several orders by ID.
    fn cancel_orders(
        &self,
        order_ids: &[String],
    ) -> impl Future<Output = Result<Value, SpikexError>> + Send;

    /// Place several orders at once.
    fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> impl Future<Output = Result<Vec<BatchOrderResult>, SpikexError>> + Send;

    /// Get details of several orders by ID.
    fn get_batch_orders(
        &self,
        order_ids: &[String],
    ) -> impl Future<Output = Result<Vec<Order>, SpikexError>> + Send;

    /// Get details of every open order.
    fn get_all_open_order_details(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, SpikexError>> + Send;

    /// Query historical orders.
    fn get_history_orders(
        &self,
        request: &HistoryOrdersRequest,
    ) -> impl Future<Output = Result<Page<Order>, SpikexError>> + Send;

    /// Query own trades.
    fn get_trades(
        &self,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<Page<AccountTrade>, SpikexError>> + Send;

    // ========== Private Endpoints - Assets ==========

    /// Get the balance of one currency.
    fn get_balance(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Balance, SpikexError>> + Send;

    /// Get balances of several currencies.
    fn get_balances(
        &self,
        currencies: &[&str],
    ) -> impl Future<Output = Result<Balances, SpikexError>> + Send;

    /// Move funds between business accounts.
    fn transfer(
        &self,
        request: &TransferRequest,
    ) -> impl Future<Output = Result<TransferId, SpikexError>> + Send;

    // ========== Private Endpoints - WebSocket ==========

    /// Get a listen key for the private WebSocket stream.
    fn get_listen_key(&self) -> impl Future<Output = Result<ListenKey, SpikexError>> + Send;
}
