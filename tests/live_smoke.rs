use std::sync::Arc;

use spikex_api_client::auth::EnvCredentials;
use spikex_api_client::spot::rest::SpotRestClient;
use spikex_api_client::spot::rest::public::SymbolFilter;

fn live_tests_enabled() -> bool {
    std::env::var("SPIKEX_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_spot_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = SpotRestClient::new();
    let time = client.get_server_time().await?;
    assert!(time.server_time > 0);

    let tickers = client
        .get_tickers(&SymbolFilter::symbol("btc_usdt"))
        .await?;
    assert!(!tickers.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_spot_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = SpotRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let _balances = client.get_balances(&["usdt"]).await?;
    let key = client.get_listen_key().await?;
    assert!(!key.access_token.is_empty());

    Ok(())
}
