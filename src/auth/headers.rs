//! The `xt-validate-*` authentication header set.

use std::collections::BTreeMap;

/// Access key header.
pub const APPKEY_HEADER: &str = "xt-validate-appkey";
/// Epoch-millisecond timestamp header.
pub const TIMESTAMP_HEADER: &str = "xt-validate-timestamp";
/// Receive window header.
pub const RECV_WINDOW_HEADER: &str = "xt-validate-recvwindow";
/// Signing algorithm header.
pub const ALGORITHMS_HEADER: &str = "xt-validate-algorithms";
/// Signature header.
pub const SIGNATURE_HEADER: &str = "xt-validate-signature";

/// Value of [`ALGORITHMS_HEADER`].
pub const SIGNING_ALGORITHM: &str = "HmacSHA256";
/// Default tolerance for stale timestamps, in milliseconds.
pub const DEFAULT_RECV_WINDOW: u64 = 60_000;

/// The four headers that take part in the signature.
///
/// Built fresh for every request and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Access key.
    pub access_key: String,
    /// Epoch milliseconds.
    pub timestamp: u64,
    /// Receive window in milliseconds.
    pub recv_window: u64,
}

impl AuthHeaders {
    /// Create the header set for one request.
    pub fn new(access_key: impl Into<String>, timestamp: u64, recv_window: u64) -> Self {
        Self {
            access_key: access_key.into(),
            timestamp,
            recv_window,
        }
    }

    /// Header names and values, sorted by name.
    pub fn entries(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (APPKEY_HEADER, self.access_key.clone()),
            (TIMESTAMP_HEADER, self.timestamp.to_string()),
            (RECV_WINDOW_HEADER, self.recv_window.to_string()),
            (ALGORITHMS_HEADER, SIGNING_ALGORITHM.to_string()),
        ])
    }

    /// The header prefix of the signing string.
    pub fn canonical_string(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Attach the computed signature.
    pub fn signed(self, signature: String) -> SignedHeaders {
        SignedHeaders {
            headers: self,
            signature,
        }
    }
}

/// The full set of five authentication headers sent with a private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// The signed header set.
    pub headers: AuthHeaders,
    /// Uppercase hex HMAC-SHA256 digest.
    pub signature: String,
}

impl SignedHeaders {
    /// All five headers, sorted by name.
    pub fn entries(&self) -> BTreeMap<&'static str, String> {
        let mut entries = self.headers.entries();
        entries.insert(SIGNATURE_HEADER, self.signature.clone());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_string_sorted_by_header_name() {
        let headers = AuthHeaders::new("626fa1c2-94bf-4559-a3f2-c62897bc392e", 1641446237201, 5000);
        assert_eq!(
            headers.canonical_string(),
            "xt-validate-algorithms=HmacSHA256\
             &xt-validate-appkey=626fa1c2-94bf-4559-a3f2-c62897bc392e\
             &xt-validate-recvwindow=5000\
             &xt-validate-timestamp=1641446237201"
        );
    }

    #[test]
    fn test_signed_headers_include_signature() {
        let signed = AuthHeaders::new("key", 1, DEFAULT_RECV_WINDOW).signed("ABC".to_string());
        let entries = signed.entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[SIGNATURE_HEADER], "ABC");
        assert_eq!(entries[RECV_WINDOW_HEADER], "60000");
        assert_eq!(entries[ALGORITHMS_HEADER], "HmacSHA256");
    }
}
