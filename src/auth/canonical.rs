//! Canonical signing string construction.
//!
//! The string signed for every private request is:
//!
//! ```text
//! <sorted auth headers as k=v&k=v>#<METHOD>#<path>[#<sorted query as k=v&k=v>][#<json body>]
//! ```
//!
//! Empty query and body components are dropped together with their `#` separator.
//! The server recomputes the same string, so every byte must match.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthHeaders;
use crate::error::SpikexError;

/// HTTP verbs supported by the Spikex REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// The verb as it appears on the wire and in the signing string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query parameters, kept in lexicographic key order.
///
/// Values render as their plain string form, except arrays and objects which
/// render as compact JSON. The rendered values are used both in the signing
/// string and on the wire, so what is signed is what is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from any struct or map that serializes to a JSON object.
    ///
    /// `null` fields are dropped.
    pub fn from_serialize<T>(params: &T) -> Result<Self, SpikexError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(params)? {
            Value::Object(map) => Ok(Self(
                map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            )),
            Value::Null => Ok(Self::new()),
            other => Err(SpikexError::InvalidRequest(format!(
                "query parameters must serialize to an object, got {other}"
            ))),
        }
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if !value.is_null() {
            self.0.insert(key.into(), value);
        }
        self
    }

    /// Builder-style [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// No parameters present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameters as `(key, rendered value)` pairs in sorted key order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), render_value(v)))
            .collect()
    }

    /// The query component of the signing string: `k=v` joined by `&`, unescaped.
    pub fn canonical_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Percent-encoded query string for the request URL.
    pub fn to_url_encoded(&self) -> Result<String, SpikexError> {
        serde_urlencoded::to_string(self.pairs())
            .map_err(|e| SpikexError::InvalidRequest(e.to_string()))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // Numbers, booleans, arrays and objects all use their compact JSON form.
        other => other.to_string(),
    }
}

/// Encode a request body exactly as it is sent and signed.
pub fn encode_body<B>(body: &B) -> Result<String, SpikexError>
where
    B: Serialize + ?Sized,
{
    Ok(serde_json::to_string(body)?)
}

/// The request-dependent part of the signing string.
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path without host or query string, e.g. `/v4/order`.
    pub path: &'a str,
    /// Query parameters, if any.
    pub query: Option<&'a QueryParams>,
    /// Encoded JSON body, if any.
    pub body: Option<&'a str>,
}

impl<'a> SignableRequest<'a> {
    /// A request with neither query nor body.
    pub fn new(method: HttpMethod, path: &'a str) -> Self {
        Self {
            method,
            path,
            query: None,
            body: None,
        }
    }

    /// Attach query parameters.
    pub fn query(mut self, query: &'a QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Attach an encoded body.
    pub fn body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }

    /// `#` followed by the non-empty items of `[method, path, query, body]` joined by `#`.
    pub fn message_suffix(&self) -> String {
        let query = self.query.map(QueryParams::canonical_string).unwrap_or_default();
        let body = self.body.unwrap_or_default();

        let parts: Vec<&str> = [self.method.as_str(), self.path, query.as_str(), body]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        format!("#{}", parts.join("#"))
    }
}

/// Concatenate the header prefix and the message suffix.
pub fn build_signing_string(headers: &AuthHeaders, request: &SignableRequest<'_>) -> String {
    let mut signing_string = headers.canonical_string();
    signing_string.push_str(&request.message_suffix());
    signing_string
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_keys_sorted_regardless_of_insertion_order() {
        let a = QueryParams::from_serialize(&json!({"b": 1, "a": 2})).unwrap();
        let b = QueryParams::from_serialize(&json!({"a": 2, "b": 1})).unwrap();
        assert_eq!(a.canonical_string(), "a=2&b=1");
        assert_eq!(a.canonical_string(), b.canonical_string());
    }

    #[test]
    fn test_composite_values_render_as_compact_json() {
        let query = QueryParams::new()
            .with("symbols", json!(["x", "y"]))
            .with("filter", json!({"k": "v"}))
            .with("symbol", "btc_usdt");
        assert_eq!(
            query.canonical_string(),
            r#"filter={"k":"v"}&symbol=btc_usdt&symbols=["x","y"]"#
        );
    }

    #[test]
    fn test_scalars_render_plain() {
        let query = QueryParams::new()
            .with("limit", 100)
            .with("hiddenCanceled", true)
            .with("fromId", "6216559590087220004");
        assert_eq!(
            query.canonical_string(),
            "fromId=6216559590087220004&hiddenCanceled=true&limit=100"
        );
    }

    #[test]
    fn test_null_values_are_dropped() {
        #[derive(Serialize)]
        struct Params {
            symbol: &'static str,
            side: Option<&'static str>,
        }
        let query = QueryParams::from_serialize(&Params {
            symbol: "btc_usdt",
            side: None,
        })
        .unwrap();
        assert_eq!(query.canonical_string(), "symbol=btc_usdt");
    }

    #[test]
    fn test_non_object_query_rejected() {
        let err = QueryParams::from_serialize(&json!(["a"])).unwrap_err();
        assert!(matches!(err, SpikexError::InvalidRequest(_)));
    }

    #[test]
    fn test_url_encoding_escapes_rendered_values() {
        let query = QueryParams::new().with("orderIds", "1,2");
        assert_eq!(query.to_url_encoded().unwrap(), "orderIds=1%2C2");
    }

    #[test]
    fn test_message_suffix_drops_empty_components() {
        let empty = QueryParams::new();
        let request = SignableRequest::new(HttpMethod::Get, "/v4/balances").query(&empty);
        assert_eq!(request.message_suffix(), "#GET#/v4/balances");

        let query = QueryParams::new().with("currency", "usdt");
        let request = SignableRequest::new(HttpMethod::Get, "/v4/balance").query(&query);
        assert_eq!(request.message_suffix(), "#GET#/v4/balance#currency=usdt");

        let request = SignableRequest::new(HttpMethod::Post, "/v4/order").body(r#"{"a":1}"#);
        assert_eq!(request.message_suffix(), r#"#POST#/v4/order#{"a":1}"#);
    }

    #[test]
    fn test_message_suffix_query_before_body() {
        let query = QueryParams::new().with("symbol", "btc_usdt");
        let request = SignableRequest::new(HttpMethod::Delete, "/v4/open-order")
            .query(&query)
            .body(r#"{"bizType":"SPOT"}"#);
        assert_eq!(
            request.message_suffix(),
            r#"#DELETE#/v4/open-order#symbol=btc_usdt#{"bizType":"SPOT"}"#
        );
    }

    #[test]
    fn test_body_encoding_is_compact_and_ordered() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            symbol: &'static str,
            client_order_id: &'static str,
        }
        let body = encode_body(&Body {
            symbol: "BTC_USDT",
            client_order_id: "1",
        })
        .unwrap();
        assert_eq!(body, r#"{"symbol":"BTC_USDT","clientOrderId":"1"}"#);
    }
}
