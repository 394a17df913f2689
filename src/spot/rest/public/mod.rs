//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use types::{CurrencyList, SymbolList};

use crate::auth::QueryParams;
use crate::error::SpikexError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::public;

impl SpotRestClient {
    /// Get the server time.
    ///
    /// This is useful for checking clock drift against the receive window.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use spikex_api_client::spot::rest::SpotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new();
    ///     let time = client.get_server_time().await?;
    ///     println!("Server time: {}", time.server_time);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_server_time(&self) -> Result<ServerTime, SpikexError> {
        self.public_get(public::TIME, None).await
    }

    /// Get trading pair configuration.
    pub async fn get_symbols(&self, filter: &SymbolFilter) -> Result<Vec<SymbolInfo>, SpikexError> {
        let query = QueryParams::from_serialize(filter)?;
        let list: SymbolList = self.public_get(public::SYMBOL, Some(&query)).await?;
        Ok(list.symbols)
    }

    /// Get order book depth for a pair.
    pub async fn get_depth(&self, request: &DepthRequest) -> Result<Depth, SpikexError> {
        let query = QueryParams::from_serialize(request)?;
        self.public_get(public::DEPTH, Some(&query)).await
    }

    /// Get kline (candlestick) data.
    pub async fn get_klines(&self, request: &KlineRequest) -> Result<Vec<Kline>, SpikexError> {
        let query = QueryParams::from_serialize(request)?;
        self.public_get(public::KLINE, Some(&query)).await
    }

    /// Get the most recent public trades for a pair.
    pub async fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> Result<Vec<PublicTrade>, SpikexError> {
        let query = QueryParams::from_serialize(request)?;
        self.public_get(public::TRADE_RECENT, Some(&query)).await
    }

    /// Page through historical public trades for a pair.
    pub async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<PublicTrade>, SpikexError> {
        let query = QueryParams::from_serialize(request)?;
        self.public_get(public::TRADE_HISTORY, Some(&query)).await
    }

    /// Get latest prices.
    pub async fn get_tickers(&self, filter: &SymbolFilter) -> Result<Vec<PriceTicker>, SpikexError> {
        let query = QueryParams::from_serialize(filter)?;
        self.public_get(public::TICKER_PRICE, Some(&query)).await
    }

    /// Get best bid and ask.
    pub async fn get_book_tickers(
        &self,
        filter: &SymbolFilter,
    ) -> Result<Vec<BookTicker>, SpikexError> {
        let query = QueryParams::from_serialize(filter)?;
        self.public_get(public::TICKER_BOOK, Some(&query)).await
    }

    /// Get 24 hour statistics.
    pub async fn get_tickers_24h(&self, filter: &SymbolFilter) -> Result<Vec<Ticker24h>, SpikexError> {
        let query = QueryParams::from_serialize(filter)?;
        self.public_get(public::TICKER_24H, Some(&query)).await
    }

    /// Get information about all listed currencies.
    pub async fn get_currencies(&self) -> Result<Vec<CurrencyInfo>, SpikexError> {
        let list: CurrencyList = self.public_get(public::CURRENCIES, None).await?;
        Ok(list.currencies)
    }
}
