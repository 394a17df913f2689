//! Spikex spot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{
    AuthHeaders, CredentialsProvider, DEFAULT_RECV_WINDOW, HttpMethod, QueryParams,
    SignableRequest, SystemClock, TimestampProvider, sign_request,
};
use crate::error::{RequestContext, SpikexError, TransportError, TransportErrorKind};
use crate::spot::rest::endpoints::SPIKEX_BASE_URL;
use crate::spot::rest::envelope::Envelope;
use crate::spot::rest::private::{
    AccountTrade, Balance, Balances, BatchOrderRequest, BatchOrderResult, CancelOpenOrdersRequest,
    CancelOrderResponse, HistoryOrdersRequest, ListenKey, OpenOrdersRequest, Order, OrderQuery,
    Page, PlaceOrderRequest, PlaceOrderResponse, TradesRequest, TransferId, TransferRequest,
};
use crate::spot::rest::public::{
    BookTicker, CurrencyInfo, Depth, DepthRequest, Kline, KlineRequest, PriceTicker, PublicTrade,
    RecentTradesRequest, ServerTime, SymbolFilter, SymbolInfo, Ticker24h, TradeHistoryRequest,
};
use crate::spot::rest::traits::SpikexClient;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The Spikex spot REST API client.
///
/// This client provides access to the Spikex spot market data, order and
/// asset endpoints. It signs private requests and unwraps the response envelope.
///
/// # Example
///
/// ```rust,no_run
/// use spikex_api_client::spot::rest::SpotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = SpotRestClient::new();
///
///     let time = client.get_server_time().await?;
///     println!("Server time: {:?}", time);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use spikex_api_client::spot::rest::SpotRestClient;
/// use spikex_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("access_key", "secret_key"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.get_balances(&[]).await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: u64,
}

impl SpotRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`SpotRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// Whether usable credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(|c| c.get_credentials().is_complete())
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(
        &self,
        endpoint: &str,
        query: Option<&QueryParams>,
    ) -> Result<T, SpikexError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint, query)?;
        let context = request_context(HttpMethod::Get, &url, query, None);
        let builder = self.http_client.get(url);
        let payload = self.execute(builder, &context).await?;

        Envelope::decode(payload)?.into_result().inspect_err(|err| {
            if let SpikexError::Api(api) = err {
                tracing::debug!(url = %context.url, method = %context.method, params = %context.params, "{api}");
            }
        })
    }

    /// Make a signed GET request.
    pub(crate) async fn private_get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T, SpikexError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query = QueryParams::from_serialize(params)?;
        self.private_request(HttpMethod::Get, endpoint, Some(&query), None)
            .await
    }

    /// Make a signed POST request with a JSON body.
    pub(crate) async fn private_post<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, SpikexError>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let body = body.map(crate::auth::encode_body).transpose()?;
        self.private_request(HttpMethod::Post, endpoint, None, body)
            .await
    }

    /// Make a signed DELETE request, optionally with a JSON body.
    pub(crate) async fn private_delete<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, SpikexError>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let body = body.map(crate::auth::encode_body).transpose()?;
        self.private_request(HttpMethod::Delete, endpoint, None, body)
            .await
    }

    /// Sign and send a private request.
    ///
    /// Credentials are checked before anything is sent. The signed body is the
    /// exact body put on the wire.
    pub(crate) async fn private_request<T>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: Option<&QueryParams>,
        body: Option<String>,
    ) -> Result<T, SpikexError>
    where
        T: DeserializeOwned,
    {
        let credentials = self
            .credentials
            .as_ref()
            .map(|provider| provider.get_credentials())
            .filter(|creds| creds.is_complete())
            .ok_or(SpikexError::MissingCredentials)?;

        let headers = AuthHeaders::new(
            credentials.access_key.clone(),
            self.timestamp_provider.timestamp_millis(),
            self.recv_window,
        );
        let signable = SignableRequest {
            method,
            path: endpoint,
            query,
            body: body.as_deref(),
        };
        let signature = sign_request(credentials, &headers, &signable)?;
        let signed = headers.signed(signature);

        let url = self.url(endpoint, query)?;
        let context = request_context(method, &url, query, body.as_deref());

        let mut builder = self.http_client.request(method.into(), url);
        for (name, value) in signed.entries() {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let payload = self.execute(builder, &context).await?;
        match Envelope::decode(payload)? {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(err) => {
                if err.is_signature_error() {
                    tracing::error!(
                        url = %context.url,
                        method = %context.method,
                        params = %context.params,
                        headers = ?signed.entries(),
                        "{err}"
                    );
                } else {
                    tracing::debug!(
                        url = %context.url,
                        method = %context.method,
                        params = %context.params,
                        source = %err.source,
                        "{err}"
                    );
                }
                Err(SpikexError::Api(err))
            }
        }
    }

    fn url(&self, endpoint: &str, query: Option<&QueryParams>) -> Result<Url, SpikexError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.set_query(Some(&query.to_url_encoded()?));
        }
        Ok(url)
    }

    /// Send the request and parse the body as JSON.
    ///
    /// Connection failures, non-2xx statuses and non-JSON bodies all surface as
    /// [`SpikexError::Transport`] carrying the request context.
    async fn execute(
        &self,
        builder: RequestBuilder,
        context: &RequestContext,
    ) -> Result<Value, SpikexError> {
        let response = builder
            .send()
            .await
            .map_err(|e| transport_failure(context, e.into()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_failure(context, e.into()))?;

        if !status.is_success() {
            return Err(transport_failure(
                context,
                TransportErrorKind::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        serde_json::from_str(&body)
            .map_err(|source| transport_failure(context, TransportErrorKind::Decode { source, body }))
    }
}

fn request_context(
    method: HttpMethod,
    url: &Url,
    query: Option<&QueryParams>,
    body: Option<&str>,
) -> RequestContext {
    let query = query.map(QueryParams::canonical_string).unwrap_or_default();
    let params = [query.as_str(), body.unwrap_or_default()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut url = url.clone();
    url.set_query(None);
    RequestContext {
        method: method.to_string(),
        url: url.to_string(),
        params,
    }
}

fn transport_failure(context: &RequestContext, kind: TransportErrorKind) -> SpikexError {
    let err = TransportError::new(context.clone(), kind);
    tracing::error!(
        url = %context.url,
        method = %context.method,
        params = %context.params,
        error = %err.kind,
        "Spikex HTTP request failed"
    );
    err.into()
}

impl Default for SpotRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    recv_window: u64,
    timeout: Duration,
    user_agent: Option<String>,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SPIKEX_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set the receive window, in milliseconds.
    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> SpotRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("spikex-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("spikex-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock::new()));

        SpotRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        }
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// SpikexClient trait implementation.

impl SpikexClient for SpotRestClient {
    // ========== Public Endpoints ==========

    async fn get_server_time(&self) -> Result<ServerTime, SpikexError> {
        SpotRestClient::get_server_time(self).await
    }

    async fn get_symbols(&self, filter: &SymbolFilter) -> Result<Vec<SymbolInfo>, SpikexError> {
        SpotRestClient::get_symbols(self, filter).await
    }

    async fn get_depth(&self, request: &DepthRequest) -> Result<Depth, SpikexError> {
        SpotRestClient::get_depth(self, request).await
    }

    async fn get_klines(&self, request: &KlineRequest) -> Result<Vec<Kline>, SpikexError> {
        SpotRestClient::get_klines(self, request).await
    }

    async fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> Result<Vec<PublicTrade>, SpikexError> {
        SpotRestClient::get_recent_trades(self, request).await
    }

    async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<PublicTrade>, SpikexError> {
        SpotRestClient::get_trade_history(self, request).await
    }

    async fn get_tickers(&self, filter: &SymbolFilter) -> Result<Vec<PriceTicker>, SpikexError> {
        SpotRestClient::get_tickers(self, filter).await
    }

    async fn get_book_tickers(&self, filter: &SymbolFilter) -> Result<Vec<BookTicker>, SpikexError> {
        SpotRestClient::get_book_tickers(self, filter).await
    }

    async fn get_tickers_24h(&self, filter: &SymbolFilter) -> Result<Vec<Ticker24h>, SpikexError> {
        SpotRestClient::get_tickers_24h(self, filter).await
    }

    async fn get_currencies(&self) -> Result<Vec<CurrencyInfo>, SpikexError> {
        SpotRestClient::get_currencies(self).await
    }

    // ========== Private Endpoints - Orders ==========

    async fn get_order(&self, query: &OrderQuery) -> Result<Order, SpikexError> {
        SpotRestClient::get_order(self, query).await
    }

    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, SpikexError> {
        SpotRestClient::place_order(self, request).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<CancelOrderResponse, SpikexError> {
        SpotRestClient::cancel_order(self, order_id).await
    }

    async fn get_open_orders(&self, request: &OpenOrdersRequest) -> Result<Vec<Order>, SpikexError> {
        SpotRestClient::get_open_orders(self, request).await
    }

    async fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> Result<Value, SpikexError> {
        SpotRestClient::cancel_open_orders(self, request).await
    }

    async fn cancel_orders(&self, order_ids: &[String]) -> Result<Value, SpikexError> {
        SpotRestClient::cancel_orders(self, order_ids).await
    }

    async fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<Vec<BatchOrderResult>, SpikexError> {
        SpotRestClient::place_batch_orders(self, request).await
    }

    async fn get_batch_orders(&self, order_ids: &[String]) -> Result<Vec<Order>, SpikexError> {
        SpotRestClient::get_batch_orders(self, order_ids).await
    }

    async fn get_all_open_order_details(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<Order>, SpikexError> {
        SpotRestClient::get_all_open_order_details(self, symbol).await
    }

    async fn get_history_orders(
        &self,
        request: &HistoryOrdersRequest,
    ) -> Result<Page<Order>, SpikexError> {
        SpotRestClient::get_history_orders(self, request).await
    }

    async fn get_trades(&self, request: &TradesRequest) -> Result<Page<AccountTrade>, SpikexError> {
        SpotRestClient::get_trades(self, request).await
    }

    // ========== Private Endpoints - Assets ==========

    async fn get_balance(&self, currency: &str) -> Result<Balance, SpikexError> {
        SpotRestClient::get_balance(self, currency).await
    }

    async fn get_balances(&self, currencies: &[&str]) -> Result<Balances, SpikexError> {
        SpotRestClient::get_balances(self, currencies).await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferId, SpikexError> {
        SpotRestClient::transfer(self, request).await
    }

    // ========== Private Endpoints - WebSocket ==========

    async fn get_listen_key(&self) -> Result<ListenKey, SpikexError> {
        SpotRestClient::get_listen_key(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_strips_query() {
        let url = Url::parse("https://sapi.spikex.com/v4/balance?currency=usdt").unwrap();
        let query = QueryParams::new().with("currency", "usdt");
        let context = request_context(HttpMethod::Get, &url, Some(&query), None);
        assert_eq!(context.url, "https://sapi.spikex.com/v4/balance");
        assert_eq!(context.method, "GET");
        assert_eq!(context.params, "currency=usdt");
    }

    #[test]
    fn test_url_appends_encoded_query() {
        let client = SpotRestClient::builder()
            .base_url("http://localhost:1234/")
            .build();
        let query = QueryParams::new().with("orderIds", "1,2");
        let url = client.url("/v4/batch-order", Some(&query)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v4/batch-order?orderIds=1%2C2");

        let url = client.url("/v4/balances", Some(&QueryParams::new())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v4/balances");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = SpotRestClient::builder()
            .credentials(Arc::new(crate::auth::StaticCredentials::new("k", "very-secret")))
            .build();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("has_credentials: true"));
        assert!(!rendered.contains("very-secret"));
        assert!(client.has_credentials());
    }
}
