//! Spikex REST API endpoint constants.

/// Base URL for the Spikex spot REST API.
pub const SPIKEX_BASE_URL: &str = "https://sapi.spikex.com";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get server time.
    pub const TIME: &str = "/v4/public/time";
    /// Get trading pair configuration.
    pub const SYMBOL: &str = "/v4/public/symbol";
    /// Get order book depth.
    pub const DEPTH: &str = "/v4/public/depth";
    /// Get kline data.
    pub const KLINE: &str = "/v4/public/kline";
    /// Get recent trades.
    pub const TRADE_RECENT: &str = "/v4/public/trade/recent";
    /// Get historical trades.
    pub const TRADE_HISTORY: &str = "/v4/public/trade/history";
    /// Get latest prices.
    pub const TICKER_PRICE: &str = "/v4/public/ticker/price";
    /// Get best bid/ask.
    pub const TICKER_BOOK: &str = "/v4/public/ticker/book";
    /// Get 24h statistics.
    pub const TICKER_24H: &str = "/v4/public/ticker/24h";
    /// Get currency information.
    pub const CURRENCIES: &str = "/v4/public/currencies";
}

/// Private endpoints (authentication required).
pub mod private {
    use crate::error::SpikexError;

    // Order endpoints
    /// Get, place, or (with `/{id}`) cancel a single order.
    pub const ORDER: &str = "/v4/order";
    /// Query or cancel open orders.
    pub const OPEN_ORDER: &str = "/v4/open-order";
    /// Place, query, or cancel orders in batch.
    pub const BATCH_ORDER: &str = "/v4/batch-order";
    /// Query historical orders.
    pub const HISTORY_ORDER: &str = "/v4/history-order";
    /// Query own trades.
    pub const TRADE: &str = "/v4/trade";

    // Asset endpoints
    /// Get balance of one currency.
    pub const BALANCE: &str = "/v4/balance";
    /// Get balances of several currencies.
    pub const BALANCES: &str = "/v4/balances";
    /// Transfer between business accounts.
    pub const BALANCE_TRANSFER: &str = "/v4/balance/transfer";

    // WebSocket token
    /// Get a listen key for the private WebSocket stream.
    pub const WS_TOKEN: &str = "/v4/ws-token";

    /// Path of a single order, e.g. `/v4/order/123`.
    ///
    /// The ID becomes a path segment, so it must be non-empty and contain only
    /// ASCII alphanumerics, `-` or `_`.
    pub fn order_by_id(order_id: &str) -> Result<String, SpikexError> {
        let valid = !order_id.is_empty()
            && order_id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !valid {
            return Err(SpikexError::InvalidRequest(format!(
                "invalid order ID for path: {order_id:?}"
            )));
        }
        Ok(format!("{ORDER}/{order_id}"))
    }
}
