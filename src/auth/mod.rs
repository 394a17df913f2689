//! Authentication module for Spikex API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Timestamp generation with clock-skew compensation
//! - The `xt-validate-*` header set and canonical signing string
//! - HMAC-SHA256 signature generation for authenticated requests

mod canonical;
mod credentials;
mod headers;
mod signature;
mod timestamp;

pub use canonical::{HttpMethod, QueryParams, SignableRequest, build_signing_string, encode_body};
pub use credentials::{
    ACCESS_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use headers::{
    ALGORITHMS_HEADER, APPKEY_HEADER, AuthHeaders, DEFAULT_RECV_WINDOW, RECV_WINDOW_HEADER,
    SIGNATURE_HEADER, SIGNING_ALGORITHM, SignedHeaders, TIMESTAMP_HEADER,
};
pub use signature::{sign_request, sign_string};
pub use timestamp::{DEFAULT_CLOCK_SKEW, FixedTimestamp, SystemClock, TimestampProvider};
