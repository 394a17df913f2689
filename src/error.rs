//! Error types for the Spikex client library.

use std::fmt;

use thiserror::Error;

/// The main error type for all Spikex client operations.
#[derive(Error, Debug)]
pub enum SpikexError {
    /// Credentials are required for the endpoint but were not configured.
    #[error("Missing credentials: access key and secret key required for private endpoints")]
    MissingCredentials,

    /// The HTTP exchange failed before a well-formed envelope was received.
    #[error(transparent)]
    Transport(Box<TransportError>),

    /// Spikex API returned a non-zero return code
    #[error("Spikex API error: {0}")]
    Api(ApiError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be built from the given parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl SpikexError {
    /// Returns the business error descriptor, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SpikexError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this is a signature verification failure reported by the server.
    pub fn is_signature_error(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_signature_error)
    }
}

impl From<TransportError> for SpikexError {
    fn from(err: TransportError) -> Self {
        SpikexError::Transport(Box::new(err))
    }
}

/// Identifies the request a failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method.
    pub method: String,
    /// Full request URL (without query string).
    pub url: String,
    /// Rendered query parameters and/or body.
    pub params: String,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url:{} method:{} params:{}", self.url, self.method, self.params)
    }
}

/// Underlying cause of a [`TransportError`].
#[derive(Error, Debug)]
pub enum TransportErrorKind {
    /// Connection, TLS, or timeout failure.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Failure raised inside the middleware stack.
    #[error("{0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body was not valid JSON.
    #[error("invalid JSON response: {source}. Body: {body}")]
    Decode {
        /// Parse error.
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },
}

/// An HTTP-level failure together with the request that caused it.
#[derive(Error, Debug)]
#[error("Spikex HTTP error: {request} exception:{kind}")]
pub struct TransportError {
    /// The request being executed.
    pub request: RequestContext,
    /// What went wrong.
    #[source]
    pub kind: TransportErrorKind,
}

impl TransportError {
    /// Create a transport error for the given request.
    pub fn new(request: RequestContext, kind: impl Into<TransportErrorKind>) -> Self {
        Self {
            request,
            kind: kind.into(),
        }
    }

    /// HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            TransportErrorKind::Status { status, .. } => Some(*status),
            TransportErrorKind::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Business error returned in a well-formed response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The `rc` field.
    pub return_code: i64,
    /// The `mc` field (e.g. `"AUTH_103"`).
    pub message_code: String,
    /// Human-readable description looked up from [`error_codes::describe`].
    pub description: String,
    /// The full response payload.
    pub source: serde_json::Value,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RC:{} MC:{} DESC:{}",
            self.return_code, self.message_code, self.description
        )
    }
}

impl ApiError {
    /// Create an API error, resolving the description from the message code.
    pub fn new(return_code: i64, message_code: impl Into<String>, source: serde_json::Value) -> Self {
        let message_code = message_code.into();
        Self {
            return_code,
            description: error_codes::describe(&message_code),
            message_code,
            source,
        }
    }

    /// Check if the server rejected the request signature.
    pub fn is_signature_error(&self) -> bool {
        self.message_code == error_codes::AUTH_SIGNATURE_ERROR
    }

    /// Check if this is any authentication failure (`AUTH_*`).
    pub fn is_auth_error(&self) -> bool {
        self.message_code.starts_with("AUTH_")
    }

    /// Check if the request expired outside the receive window.
    pub fn is_request_expired(&self) -> bool {
        self.message_code == error_codes::AUTH_REQUEST_EXPIRED
    }

    /// Check if this is an order rejection (`ORDER_*`).
    pub fn is_order_error(&self) -> bool {
        self.message_code.starts_with("ORDER_")
    }

    /// Check if the order was rejected for insufficient funds.
    pub fn is_insufficient_funds(&self) -> bool {
        self.message_code == error_codes::ORDER_INSUFFICIENT_FUNDS
    }
}

/// Known Spikex message codes.
pub mod error_codes {
    pub const CLIENT_ERROR: &str = "0";
    pub const SUCCESS: &str = "SUCCESS";
    pub const FAILURE: &str = "FAILURE";
    pub const NOT_EXIST: &str = "not exist";

    /// Authentication errors
    pub const AUTH_MISSING_APPKEY: &str = "AUTH_001";
    pub const AUTH_MISSING_TIMESTAMP: &str = "AUTH_002";
    pub const AUTH_MISSING_RECVWINDOW: &str = "AUTH_003";
    pub const AUTH_INVALID_RECVWINDOW: &str = "AUTH_004";
    pub const AUTH_MISSING_ALGORITHMS: &str = "AUTH_005";
    pub const AUTH_INVALID_ALGORITHMS: &str = "AUTH_006";
    pub const AUTH_MISSING_SIGNATURE: &str = "AUTH_007";
    pub const AUTH_APIKEY_NOT_FOUND: &str = "AUTH_101";
    pub const AUTH_APIKEY_INACTIVE: &str = "AUTH_102";
    pub const AUTH_SIGNATURE_ERROR: &str = "AUTH_103";
    pub const AUTH_UNBOUND_IP: &str = "AUTH_104";
    pub const AUTH_REQUEST_EXPIRED: &str = "AUTH_105";
    pub const AUTH_PERMISSION_EXCEEDED: &str = "AUTH_106";

    /// Order errors
    pub const ORDER_REJECTED: &str = "ORDER_001";
    pub const ORDER_INSUFFICIENT_FUNDS: &str = "ORDER_002";
    pub const ORDER_SYMBOL_SUSPENDED: &str = "ORDER_003";
    pub const ORDER_TRADING_PROHIBITED: &str = "ORDER_004";
    pub const ORDER_NOT_FOUND: &str = "ORDER_005";
    pub const ORDER_PRICE_MIN: &str = "ORDER_F0101";
    pub const ORDER_PRICE_MAX: &str = "ORDER_F0102";
    pub const ORDER_PRICE_STEP: &str = "ORDER_F0103";
    pub const ORDER_QUANTITY_MIN: &str = "ORDER_F0201";
    pub const ORDER_QUANTITY_MAX: &str = "ORDER_F0202";
    pub const ORDER_QUANTITY_STEP: &str = "ORDER_F0203";
    pub const ORDER_AMOUNT_MIN: &str = "ORDER_F0301";
    pub const ORDER_OPENING_PROTECTION: &str = "ORDER_F0401";
    pub const ORDER_LIMIT_PROTECTION: &str = "ORDER_F0501";
    pub const ORDER_MARKET_PROTECTION: &str = "ORDER_F0601";
    pub const ORDER_TOO_MANY_OPEN: &str = "ORDER_F0701";
    pub const ORDER_TOO_MANY_CONDITIONAL: &str = "ORDER_F0801";

    const DESCRIPTIONS: &[(&str, &str)] = &[
        (CLIENT_ERROR, "Client error"),
        (SUCCESS, "Success"),
        (FAILURE, "Failure"),
        (NOT_EXIST, "Target does not exist"),
        (AUTH_MISSING_APPKEY, "Missing header xt-validate-appkey"),
        (AUTH_MISSING_TIMESTAMP, "Missing header xt-validate-timestamp"),
        (AUTH_MISSING_RECVWINDOW, "Missing header xt-validate-recvwindow"),
        (AUTH_INVALID_RECVWINDOW, "Invalid header xt-validate-recvwindow"),
        (AUTH_MISSING_ALGORITHMS, "Missing header xt-validate-algorithms"),
        (AUTH_INVALID_ALGORITHMS, "Invalid header xt-validate-algorithms"),
        (AUTH_MISSING_SIGNATURE, "Missing header xt-validate-signature"),
        (AUTH_APIKEY_NOT_FOUND, "ApiKey does not exist"),
        (AUTH_APIKEY_INACTIVE, "ApiKey not activated"),
        (AUTH_SIGNATURE_ERROR, "Signature error"),
        (AUTH_UNBOUND_IP, "Request from non-bound IP"),
        (AUTH_REQUEST_EXPIRED, "Request expired"),
        (AUTH_PERMISSION_EXCEEDED, "ApiKey permission exceeded"),
        (ORDER_REJECTED, "Platform rejected order"),
        (ORDER_INSUFFICIENT_FUNDS, "Insufficient funds"),
        (ORDER_SYMBOL_SUSPENDED, "Trading pair suspended"),
        (ORDER_TRADING_PROHIBITED, "Trading prohibited"),
        (ORDER_NOT_FOUND, "Order does not exist"),
        (ORDER_PRICE_MIN, "Price filter triggered - minimum value"),
        (ORDER_PRICE_MAX, "Price filter triggered - maximum value"),
        (ORDER_PRICE_STEP, "Price filter triggered - step value"),
        (ORDER_QUANTITY_MIN, "Quantity filter triggered - minimum value"),
        (ORDER_QUANTITY_MAX, "Quantity filter triggered - maximum value"),
        (ORDER_QUANTITY_STEP, "Quantity filter triggered - step value"),
        (ORDER_AMOUNT_MIN, "Amount filter triggered - minimum value"),
        (ORDER_OPENING_PROTECTION, "Opening protection filter triggered"),
        (ORDER_LIMIT_PROTECTION, "Limit order protection filter triggered"),
        (ORDER_MARKET_PROTECTION, "Market order protection filter triggered"),
        (ORDER_TOO_MANY_OPEN, "Too many open orders"),
        (ORDER_TOO_MANY_CONDITIONAL, "Too many open conditional orders"),
    ];

    /// Look up the human-readable description of a message code.
    ///
    /// Unmapped codes resolve to `"Unknown error code: <code>"`.
    pub fn describe(message_code: &str) -> String {
        DESCRIPTIONS
            .iter()
            .find(|(code, _)| *code == message_code)
            .map(|(_, desc)| (*desc).to_string())
            .unwrap_or_else(|| format!("Unknown error code: {message_code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_signature_description() {
        let source = serde_json::json!({"rc": 1, "mc": "AUTH_103", "result": null});
        let error = ApiError::new(1, "AUTH_103", source.clone());
        assert_eq!(error.description, "Signature error");
        assert!(error.is_signature_error());
        assert!(error.is_auth_error());
        assert!(!error.is_order_error());
        assert_eq!(error.source, source);
    }

    #[test]
    fn test_unknown_message_code() {
        let error = ApiError::new(1, "XYZ_999", serde_json::Value::Null);
        assert_eq!(error.description, "Unknown error code: XYZ_999");
        assert!(!error.is_signature_error());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(1, "ORDER_002", serde_json::Value::Null);
        assert!(error.is_insufficient_funds());
        assert_eq!(error.to_string(), "RC:1 MC:ORDER_002 DESC:Insufficient funds");
    }

    #[test]
    fn test_transport_error_display_carries_context() {
        let request = RequestContext {
            method: "GET".to_string(),
            url: "https://sapi.spikex.com/v4/balance".to_string(),
            params: "currency=usdt".to_string(),
        };
        let err = TransportError::new(
            request,
            TransportErrorKind::Status {
                status: 502,
                body: "bad gateway".to_string(),
            },
        );
        assert_eq!(err.status(), Some(502));
        let rendered = SpikexError::from(err).to_string();
        assert!(rendered.contains("url:https://sapi.spikex.com/v4/balance"));
        assert!(rendered.contains("method:GET"));
        assert!(rendered.contains("params:currency=usdt"));
        assert!(rendered.contains("502"));
    }
}
