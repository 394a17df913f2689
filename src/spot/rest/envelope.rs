//! Response envelope decoding.
//!
//! Every Spikex response has the shape `{"rc": <int>, "mc": <string>, "result": <payload>}`.
//! `rc == 0` means success; anything else is a business error identified by `mc`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, SpikexError, error_codes};

/// A decoded response: either the typed payload or the business error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// `rc == 0`, payload decoded from `result`.
    Success(T),
    /// `rc != 0`.
    Failure(ApiError),
}

impl<T> Envelope<T> {
    /// Convert into a `Result`, mapping failures to [`SpikexError::Api`].
    pub fn into_result(self) -> Result<T, SpikexError> {
        match self {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(err) => Err(SpikexError::Api(err)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnvelopeHeader {
    rc: i64,
    #[serde(default)]
    mc: Option<String>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a parsed response body.
    ///
    /// Fails only if the body is not an envelope or `result` does not match `T`.
    pub fn decode(payload: Value) -> Result<Self, serde_json::Error> {
        let header = EnvelopeHeader::deserialize(&payload)?;
        if header.rc != 0 {
            let message_code = header
                .mc
                .unwrap_or_else(|| error_codes::CLIENT_ERROR.to_string());
            return Ok(Envelope::Failure(ApiError::new(
                header.rc,
                message_code,
                payload,
            )));
        }

        let result = match payload {
            Value::Object(mut map) => map.remove("result").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        serde_json::from_value(result).map(Envelope::Success)
    }
}
