//! Custom serde helpers for OKX's serialization formats.
//!
//! OKX sends nearly every scalar as a JSON string: amounts, timestamps, state
//! codes. Optional values that are not set come back as `""` rather than
//! `null`. These modules bridge those formats to Rust types.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a type using its Display/FromStr implementations.
///
/// OKX encodes integers such as millisecond timestamps and state codes as strings.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use okx_api_client::types::serde_helpers::display_fromstr;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Record {
///     #[serde(with = "display_fromstr")]
///     ts: u64,
/// }
///
/// let record: Record = serde_json::from_str(r#"{"ts":"1597026383085"}"#).unwrap();
/// assert_eq!(record.ts, 1597026383085);
/// assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"ts":"1597026383085"}"#);
/// ```
pub mod display_fromstr {
    use super::*;

    /// Serialize using Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize using FromStr trait.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Optional variant of [`display_fromstr`]: `""`, `null` and a missing field
/// all become `None`. `None` serializes back to `""`.
pub mod optional_display_fromstr {
    use super::*;

    /// Serialize `Some` using Display, `None` as `""`.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserialize using FromStr, treating an empty string as `None`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => s.parse().map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Helper for decimal fields that OKX leaves as `""` when unset.
///
/// `None` serializes back to `""`, so a record keeps its wire form.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use rust_decimal::Decimal;
/// use okx_api_client::types::serde_helpers::maybe_decimal;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Currency {
///     #[serde(with = "maybe_decimal", default)]
///     max_fee: Option<Decimal>,
/// }
///
/// let currency: Currency = serde_json::from_str(r#"{"max_fee":""}"#).unwrap();
/// assert!(currency.max_fee.is_none());
/// assert_eq!(serde_json::to_string(&currency).unwrap(), r#"{"max_fee":""}"#);
///
/// let currency: Currency = serde_json::from_str(r#"{"max_fee":"0.8"}"#).unwrap();
/// assert_eq!(currency.max_fee.unwrap().to_string(), "0.8");
/// ```
pub mod maybe_decimal {
    use super::*;
    use rust_decimal::Decimal;

    /// Serialize `Some` as a decimal string, `None` as `""`.
    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserialize a value that may be `""`, `null` or a decimal string/number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MaybeDecimalVisitor;

        impl<'de> de::Visitor<'de> for MaybeDecimalVisitor {
            type Value = Option<Decimal>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string, an empty string or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() {
                    return Ok(None);
                }
                v.parse().map(Some).map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::try_from(v).map(Some).map_err(de::Error::custom)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }
        }

        deserializer.deserialize_any(MaybeDecimalVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// `None` serializes back to `""`.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use okx_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Response {
///     #[serde(with = "empty_string_as_none", default)]
///     tag: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"tag":""}"#).unwrap();
/// assert!(response.tag.is_none());
/// assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"tag":""}"#);
///
/// let response: Response = serde_json::from_str(r#"{"tag":"123456"}"#).unwrap();
/// assert_eq!(response.tag.unwrap(), "123456");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Serialize `None` as `""`.
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
