//! # Spikex Client
//!
//! An async Rust client library for the Spikex exchange spot REST API.
//!
//! ## Features
//!
//! - Public market data and private order/asset endpoints
//! - HMAC-SHA256 request signing with the `xt-validate-*` header set
//! - Response envelope decoding with descriptive business errors
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spikex_api_client::spot::rest::SpotRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new();
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {:?}", time);
//!     Ok(())
//! }
//! ```
//!
//! ## Signing
//!
//! The signer can be used on its own:
//!
//! ```rust
//! use spikex_api_client::auth::{AuthHeaders, Credentials, HttpMethod, SignableRequest, sign_request};
//!
//! let credentials = Credentials::new("access-key", "secret-key");
//! let headers = AuthHeaders::new("access-key", 1641446237201, 5000);
//! let request = SignableRequest::new(HttpMethod::Get, "/v4/balances");
//! let signature = sign_request(&credentials, &headers, &request).unwrap();
//! assert_eq!(signature.len(), 64);
//! ```

pub mod auth;
pub mod error;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, SpikexError};
pub use types::common::{BizType, OrderType, Side, TimeInForce};

/// Result type alias using SpikexError
pub type Result<T> = std::result::Result<T, SpikexError>;
