//! Custom serde helpers for Spikex's serialization formats.

use std::fmt;

use serde::{Deserializer, Serializer, de};

/// Serialize a list of strings as a single comma-separated string.
///
/// Spikex takes multi-value query parameters such as `orderIds` and `currencies`
/// as `a,b,c`.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use spikex_api_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize)]
/// struct Request {
///     #[serde(serialize_with = "comma_separated::serialize")]
///     currencies: Vec<String>,
/// }
///
/// let request = Request {
///     currencies: vec!["usdt".to_string(), "btc".to_string()],
/// };
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"currencies":"usdt,btc"}"#);
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a slice as a comma-separated string.
    pub fn serialize<T, S>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<str>,
        S: Serializer,
    {
        let s = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&s)
    }
}

/// Serialize an optional list as a comma-separated string, or `null` when absent or empty.
pub mod comma_separated_opt {
    use super::*;

    /// Serialize an optional slice as a comma-separated string.
    pub fn serialize<T, S>(values: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<str>,
        S: Serializer,
    {
        match values {
            Some(values) if !values.is_empty() => comma_separated::serialize(values, serializer),
            _ => serializer.serialize_none(),
        }
    }
}

/// Deserialize an identifier that may arrive as a JSON string or number into a `String`.
pub mod string_or_number {
    use super::*;

    /// Deserialize a string or integer as a `String`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'v> de::Visitor<'v> for Visitor {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            // serde_json's arbitrary_precision numbers arrive as a single-entry map.
            fn visit_map<A: de::MapAccess<'v>>(self, mut map: A) -> Result<String, A::Error> {
                match map.next_entry::<String, String>()? {
                    Some((_, number)) => Ok(number),
                    None => Err(de::Error::invalid_length(0, &self)),
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Optional {
        #[serde(serialize_with = "comma_separated_opt::serialize")]
        symbols: Option<Vec<String>>,
    }

    #[derive(serde::Deserialize)]
    struct Id(#[serde(deserialize_with = "string_or_number::deserialize")] String);

    #[test]
    fn test_string_or_number() {
        let Id(from_str) = serde_json::from_str(r#""123""#).unwrap();
        let Id(from_num) = serde_json::from_str("123").unwrap();
        assert_eq!(from_str, "123");
        assert_eq!(from_num, "123");
        assert!(serde_json::from_str::<Id>("true").is_err());

        let Id(from_value) = serde_json::from_value(serde_json::json!(6216559590087220004u64)).unwrap();
        assert_eq!(from_value, "6216559590087220004");
    }

    #[test]
    fn test_comma_separated_opt() {
        let some = Optional {
            symbols: Some(vec!["btc_usdt".into(), "eth_usdt".into()]),
        };
        assert_eq!(
            serde_json::to_string(&some).unwrap(),
            r#"{"symbols":"btc_usdt,eth_usdt"}"#
        );

        let empty = Optional {
            symbols: Some(vec![]),
        };
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"symbols":null}"#);

        let none = Optional { symbols: None };
        assert_eq!(serde_json::to_string(&none).unwrap(), r#"{"symbols":null}"#);
    }
}
