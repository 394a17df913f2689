//! HMAC-SHA256 signature generation for Spikex API authentication.
//!
//! Private endpoints require a signature computed as:
//! ```text
//! UPPERCASE_HEX(HMAC-SHA256(secret_key, header_prefix + message_suffix))
//! ```
//!
//! See [`crate::auth::build_signing_string`] for the signed string layout.
//! The digest is sent in the `xt-validate-signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::{AuthHeaders, Credentials, SignableRequest, build_signing_string};
use crate::error::SpikexError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for Spikex's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret key
/// * `headers` - The auth header set for this request
/// * `request` - Method, path, query and encoded body of the request
///
/// # Returns
///
/// Uppercase hex HMAC-SHA256 signature, 64 characters long.
///
/// # Example
///
/// ```rust
/// use spikex_api_client::auth::{AuthHeaders, Credentials, HttpMethod, SignableRequest, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("access_key", "secret_key");
/// let headers = AuthHeaders::new("access_key", 1641446237201, 60000);
/// let request = SignableRequest::new(HttpMethod::Post, "/v4/order").body(r#"{"symbol":"btc_usdt"}"#);
/// let signature = sign_request(&credentials, &headers, &request)?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    headers: &AuthHeaders,
    request: &SignableRequest<'_>,
) -> Result<String, SpikexError> {
    if !credentials.is_complete() {
        return Err(SpikexError::MissingCredentials);
    }
    let signing_string = build_signing_string(headers, request);
    sign_string(credentials.expose_secret(), &signing_string)
}

/// HMAC-SHA256 of `signing_string` under `secret_key`, as uppercase hex.
pub fn sign_string(secret_key: &str, signing_string: &str) -> Result<String, SpikexError> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| SpikexError::InvalidRequest(format!("Invalid HMAC key: {e}")))?;
    mac.update(signing_string.as_bytes());
    Ok(hex::encode_upper(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{HttpMethod, QueryParams};
    use serde_json::json;

    const APPKEY: &str = "626fa1c2-94bf-4559-a3f2-c62897bc392e";
    const TIMESTAMP: u64 = 1641446237201;
    const SECRET: &str = "31e10ab4c9f8d8a7e63b5b7f2b46a0c9a0d2a9d3";
    const ORDER_BODY: &str = r#"{"symbol":"BTC_USDT","clientOrderId":"16559390087220001","side":"BUY","type":"LIMIT","timeInForce":"GTC","bizType":"SPOT","price":20,"quantity":0.001}"#;

    fn credentials() -> Credentials {
        Credentials::new(APPKEY, SECRET)
    }

    fn headers() -> AuthHeaders {
        AuthHeaders::new(APPKEY, TIMESTAMP, 5000)
    }

    #[test]
    fn test_documented_order_example() {
        let request = SignableRequest::new(HttpMethod::Post, "/spot/v4/order").body(ORDER_BODY);

        assert_eq!(
            build_signing_string(&headers(), &request),
            format!(
                "xt-validate-algorithms=HmacSHA256&xt-validate-appkey={APPKEY}\
                 &xt-validate-recvwindow=5000&xt-validate-timestamp={TIMESTAMP}\
                 #POST#/spot/v4/order#{ORDER_BODY}"
            )
        );

        let signature = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(
            signature,
            "4F49365099708A89A2556832EF343F946B379583FD5D31F0F70DA17F51968497"
        );
    }

    #[test]
    fn test_documented_body_survives_reencoding() {
        let body: serde_json::Value = serde_json::from_str(ORDER_BODY).unwrap();
        assert_eq!(crate::auth::encode_body(&body).unwrap(), ORDER_BODY);
    }

    #[test]
    fn test_query_signature() {
        let query = QueryParams::new().with("orderId", "6216559590087220004");
        let request = SignableRequest::new(HttpMethod::Get, "/v4/order").query(&query);
        let signature = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(
            signature,
            "CC03F768ACDC9F217CB8E93968B401A89A70FE202805716D3AEE8CD21570656F"
        );
    }

    #[test]
    fn test_list_query_signature() {
        let query = QueryParams::new().with("symbols", json!(["btc_usdt", "eth_usdt"]));
        let request =
            SignableRequest::new(HttpMethod::Get, "/v4/public/ticker/price").query(&query);
        let signature = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(
            signature,
            "D620F0D7DB47D13EF3CAD2EE7F4867A0FF130296FCA8D7A4A2726FFEBD822CE6"
        );
    }

    #[test]
    fn test_delete_body_signature() {
        let request =
            SignableRequest::new(HttpMethod::Delete, "/v4/batch-order").body(r#"{"orderIds":["1","2"]}"#);
        let signature = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(
            signature,
            "4B413E7AA9C8D16E0C7DED4DBBB1E3FBF8CC2C1AEAA8D1BED1F75F4F6255210C"
        );
    }

    #[test]
    fn test_signature_is_uppercase_hex() {
        let request = SignableRequest::new(HttpMethod::Get, "/v4/balances");
        let signature = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn test_signature_consistency() {
        let query = QueryParams::new().with("b", 1).with("a", 2);
        let request = SignableRequest::new(HttpMethod::Get, "/v4/trade").query(&query);
        let sig1 = sign_request(&credentials(), &headers(), &request).unwrap();
        let sig2 = sign_request(&credentials(), &headers(), &request).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let query = QueryParams::new().with("symbol", "btc_usdt");
        let base = SignableRequest::new(HttpMethod::Get, "/v4/open-order").query(&query);
        let reference = sign_request(&credentials(), &headers(), &base).unwrap();

        let other_query = QueryParams::new().with("symbol", "btc_usdc");
        let variants = [
            SignableRequest::new(HttpMethod::Delete, "/v4/open-order").query(&query),
            SignableRequest::new(HttpMethod::Get, "/v4/open-orders").query(&query),
            SignableRequest::new(HttpMethod::Get, "/v4/open-order").query(&other_query),
            base.body("{}"),
        ];
        for variant in &variants {
            let sig = sign_request(&credentials(), &headers(), variant).unwrap();
            assert_ne!(sig, reference);
        }

        let later = AuthHeaders::new(APPKEY, TIMESTAMP + 1, 5000);
        assert_ne!(sign_request(&credentials(), &later, &base).unwrap(), reference);

        let wider = AuthHeaders::new(APPKEY, TIMESTAMP, 60000);
        assert_ne!(sign_request(&credentials(), &wider, &base).unwrap(), reference);

        let other_secret = Credentials::new(APPKEY, "another-secret");
        assert_ne!(sign_request(&other_secret, &headers(), &base).unwrap(), reference);

        let other_appkey =
            AuthHeaders::new("626fa1c2-94bf-4559-a3f3-ff9a0fd1d1a5", TIMESTAMP, 5000);
        assert_ne!(sign_request(&credentials(), &other_appkey, &base).unwrap(), reference);

        let body = SignableRequest::new(HttpMethod::Post, "/v4/order").body(r#"{"a":1}"#);
        let one_byte_off =
            SignableRequest::new(HttpMethod::Post, "/v4/order").body(r#"{"a":2}"#);
        assert_ne!(
            sign_request(&credentials(), &headers(), &body).unwrap(),
            sign_request(&credentials(), &headers(), &one_byte_off).unwrap()
        );
    }

    #[test]
    fn test_empty_secret_refused() {
        let request = SignableRequest::new(HttpMethod::Get, "/v4/balances");
        let err = sign_request(&Credentials::new(APPKEY, ""), &headers(), &request).unwrap_err();
        assert!(matches!(err, SpikexError::MissingCredentials));
    }
}
