use rust_decimal::Decimal;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spikex_api_client::error::SpikexError;
use spikex_api_client::spot::rest::SpotRestClient;
use spikex_api_client::spot::rest::public::{
    DepthRequest, KlineRequest, RecentTradesRequest, SymbolFilter, TradeHistoryRequest,
};
use spikex_api_client::types::{Direction, KlineInterval};

fn build_public_client(server: &MockServer) -> SpotRestClient {
    SpotRestClient::builder().base_url(server.uri()).build()
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "rc": 0,
        "mc": "SUCCESS",
        "ma": [],
        "result": result
    }))
}

#[tokio::test]
async fn test_get_server_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/public/time"))
        .respond_with(ok(serde_json::json!({"serverTime": 1_662_435_658_062u64})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let time = client.get_server_time().await.unwrap();
    assert_eq!(time.server_time, 1_662_435_658_062);
}

#[tokio::test]
async fn test_public_requests_are_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/public/time"))
        .and(header_exists("xt-validate-signature"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/public/time"))
        .respond_with(ok(serde_json::json!({"serverTime": 1})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    client.get_server_time().await.unwrap();
}

#[tokio::test]
async fn test_get_symbols_unwraps_list() {
    let server = MockServer::start().await;
    let result = serde_json::json!({
        "time": 1662444177871u64,
        "version": "7cd2cfab0dc979339f1de904bd90c9cb",
        "symbols": [{
            "id": 614,
            "symbol": "btc_usdt",
            "state": "ONLINE",
            "tradingEnabled": true,
            "baseCurrency": "btc",
            "baseCurrencyPrecision": 10,
            "quoteCurrency": "usdt",
            "quoteCurrencyPrecision": 8,
            "pricePrecision": 2,
            "quantityPrecision": 6,
            "orderTypes": ["LIMIT", "MARKET"],
            "timeInForces": ["GTC", "FOK", "IOC", "GTX"],
            "filters": [{"filter": "QUOTE_QTY", "min": "1"}]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v4/public/symbol"))
        .and(query_param("symbol", "btc_usdt"))
        .respond_with(ok(result))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let symbols = client
        .get_symbols(&SymbolFilter::symbol("btc_usdt"))
        .await
        .unwrap();

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].symbol, "btc_usdt");
    assert_eq!(symbols[0].trading_enabled, Some(true));
    assert_eq!(symbols[0].order_types, vec!["LIMIT", "MARKET"]);
    assert_eq!(symbols[0].filters.len(), 1);
}

#[tokio::test]
async fn test_get_depth_with_limit() {
    let server = MockServer::start().await;
    let result = serde_json::json!({
        "timestamp": 1662445330524u64,
        "lastUpdateId": 137333589606963580u64,
        "bids": [["200.0000", "0.996000"]],
        "asks": [["201.0000", "1.000000"], ["202.0000", "0.500000"]]
    });

    Mock::given(method("GET"))
        .and(path("/v4/public/depth"))
        .and(query_param("symbol", "eth_usdt"))
        .and(query_param("limit", "10"))
        .respond_with(ok(result))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let depth = client
        .get_depth(&DepthRequest::new("eth_usdt").limit(10))
        .await
        .unwrap();

    assert_eq!(depth.bids.len(), 1);
    assert_eq!(depth.asks.len(), 2);
    assert_eq!(depth.asks[1].price(), Decimal::new(202, 0));
}

#[tokio::test]
async fn test_get_klines() {
    let server = MockServer::start().await;
    let result = serde_json::json!([{
        "t": 1662601014832u64,
        "o": "30000",
        "c": "32000",
        "h": "35000",
        "l": "25000",
        "q": "512",
        "v": "15360000"
    }]);

    Mock::given(method("GET"))
        .and(path("/v4/public/kline"))
        .and(query_param("symbol", "btc_usdt"))
        .and(query_param("interval", "1h"))
        .and(query_param("startTime", "1662600000000"))
        .and(query_param("endTime", "1662700000000"))
        .and(query_param("limit", "100"))
        .respond_with(ok(result))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request =
        KlineRequest::new("btc_usdt", KlineInterval::Hour1).range(1662600000000, 1662700000000);
    let klines = client.get_klines(&request).await.unwrap();

    assert_eq!(klines.len(), 1);
    assert_eq!(klines[0].open_time, 1662601014832);
    assert_eq!(klines[0].high, Decimal::new(35000, 0));
}

#[tokio::test]
async fn test_get_recent_and_historical_trades() {
    let server = MockServer::start().await;
    let trades = serde_json::json!([{
        "i": 0,
        "t": 0,
        "p": "0.02",
        "q": "0.1",
        "v": "0.002",
        "b": true
    }]);

    Mock::given(method("GET"))
        .and(path("/v4/public/trade/recent"))
        .and(query_param("symbol", "btc_usdt"))
        .and(query_param("limit", "5"))
        .respond_with(ok(trades.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/public/trade/history"))
        .and(query_param("symbol", "btc_usdt"))
        .and(query_param("direction", "PREV"))
        .and(query_param("fromId", "42"))
        .respond_with(ok(trades))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let recent = client
        .get_recent_trades(&RecentTradesRequest::new("btc_usdt").limit(5))
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert!(recent[0].buyer_maker);

    let history = client
        .get_trade_history(&TradeHistoryRequest::new("btc_usdt", Direction::Prev).from_id(42))
        .await
        .unwrap();
    assert_eq!(history[0].price, Decimal::new(2, 2));
}

#[tokio::test]
async fn test_get_tickers_for_several_symbols() {
    let server = MockServer::start().await;
    let result = serde_json::json!([
        {"s": "btc_usdt", "t": 1662444879425u64, "p": "20000.00"},
        {"s": "eth_usdt", "t": 1662444879425u64, "p": "1500.00"}
    ]);

    Mock::given(method("GET"))
        .and(path("/v4/public/ticker/price"))
        .and(query_param("symbols", "btc_usdt,eth_usdt"))
        .respond_with(ok(result))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client
        .get_tickers(&SymbolFilter::symbols(["btc_usdt", "eth_usdt"]))
        .await
        .unwrap();

    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[1].symbol, "eth_usdt");
    assert_eq!(tickers[1].price, Decimal::new(150000, 2));
}

#[tokio::test]
async fn test_get_book_and_24h_tickers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/public/ticker/book"))
        .respond_with(ok(serde_json::json!([
            {"s": "btc_usdt", "ap": "20001", "aq": "1", "bp": "19999", "bq": "2"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/public/ticker/24h"))
        .respond_with(ok(serde_json::json!([{
            "s": "btc_usdt",
            "t": 1662444879425u64,
            "cv": "0.00",
            "cr": "0.00",
            "o": "20000",
            "l": "19000",
            "h": "21000",
            "c": "20000",
            "q": "1000",
            "v": "20000000"
        }])))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client.get_book_tickers(&SymbolFilter::all()).await.unwrap();
    assert_eq!(book[0].ask_price, Some(Decimal::new(20001, 0)));

    let stats = client.get_tickers_24h(&SymbolFilter::all()).await.unwrap();
    assert_eq!(stats[0].low, Decimal::new(19000, 0));
}

#[tokio::test]
async fn test_get_currencies() {
    let server = MockServer::start().await;
    let result = serde_json::json!({
        "time": 1662444177871u64,
        "version": "1",
        "currencies": [{
            "id": 11,
            "currency": "usdt",
            "fullName": "Tether",
            "logo": "https://example.com/usdt.png",
            "maxPrecision": 8,
            "depositStatus": 1,
            "withdrawStatus": 1
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v4/public/currencies"))
        .respond_with(ok(result))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let currencies = client.get_currencies().await.unwrap();
    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].currency, "usdt");
    assert_eq!(currencies[0].full_name.as_deref(), Some("Tether"));
}

#[tokio::test]
async fn test_public_business_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/public/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rc": 1,
            "mc": "SYMBOL_001",
            "ma": [],
            "result": null
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client
        .get_depth(&DepthRequest::new("nope_usdt"))
        .await
        .unwrap_err();

    match err {
        SpikexError::Api(api) => {
            assert_eq!(api.return_code, 1);
            assert_eq!(api.message_code, "SYMBOL_001");
            assert_eq!(api.description, "Unknown error code: SYMBOL_001");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}
