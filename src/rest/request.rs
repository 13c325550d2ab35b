//! Request model for signed OKX calls.
//!
//! A request is finalized into its wire form before it is signed: GET
//! parameters move into the query string and leave an empty body, POST
//! parameters become a compact JSON document. [`PreparedRequest`] holds the
//! exact bytes that are both signed and sent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::OkxError;

/// HTTP method of an OKX REST call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`: parameters travel in the query string
    Get,
    /// `POST`: parameters travel as a JSON body
    Post,
}

impl Method {
    /// Uppercase wire form, as used in the signature input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = OkxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(OkxError::InvalidRequest(format!(
                "Unsupported HTTP method: {other}"
            ))),
        }
    }
}

/// Body of a request before it is resolved to wire bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No parameters
    #[default]
    Empty,
    /// Structured parameters, kept in sorted key order
    Params(Map<String, Value>),
    /// A preformatted string: the query for GET, the JSON payload for POST
    Raw(String),
}

impl RequestBody {
    /// Build a body from any serializable parameter struct.
    ///
    /// `null` entries (unset `Option` fields) are dropped. Explicit values such
    /// as `0`, `""` or `false` are kept.
    pub fn from_params<P>(params: &P) -> Result<Self, OkxError>
    where
        P: Serialize + ?Sized,
    {
        match serde_json::to_value(params)? {
            Value::Null => Ok(RequestBody::Empty),
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(OkxError::InvalidRequest(format!(
                "Request parameters must serialize to a JSON object, got {other}"
            ))),
        }
    }

    /// Whether the body carries no parameters.
    pub fn is_empty(&self) -> bool {
        match self {
            RequestBody::Empty => true,
            RequestBody::Params(map) => map.is_empty(),
            RequestBody::Raw(raw) => raw.is_empty(),
        }
    }

    /// Encode as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> Result<String, OkxError> {
        match self {
            RequestBody::Empty => Ok(String::new()),
            RequestBody::Raw(raw) => Ok(raw.clone()),
            RequestBody::Params(map) => {
                let pairs: Vec<(&str, String)> = map
                    .iter()
                    .map(|(key, value)| (key.as_str(), query_value(value)))
                    .collect();
                serde_urlencoded::to_string(&pairs)
                    .map_err(|e| OkxError::InvalidRequest(e.to_string()))
            }
        }
    }

    /// Encode as a compact JSON document, or `""` when empty.
    pub fn to_json_string(&self) -> Result<String, OkxError> {
        match self {
            RequestBody::Empty => Ok(String::new()),
            RequestBody::Raw(raw) => Ok(raw.clone()),
            RequestBody::Params(map) if map.is_empty() => Ok(String::new()),
            RequestBody::Params(map) => Ok(serde_json::to_string(map)?),
        }
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        let sorted: BTreeMap<String, Value> =
            map.into_iter().filter(|(_, v)| !v.is_null()).collect();
        let map: Map<String, Value> = sorted.into_iter().collect();
        if map.is_empty() {
            RequestBody::Empty
        } else {
            RequestBody::Params(map)
        }
    }
}

impl From<String> for RequestBody {
    fn from(raw: String) -> Self {
        RequestBody::Raw(raw)
    }
}

impl From<&str> for RequestBody {
    fn from(raw: &str) -> Self {
        RequestBody::Raw(raw.to_string())
    }
}

impl From<Option<Map<String, Value>>> for RequestBody {
    fn from(map: Option<Map<String, Value>>) -> Self {
        map.map(Self::from).unwrap_or_default()
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A request resolved to the bytes that are signed and put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Path including the query string for GET requests
    pub request_path: String,
    /// JSON payload for POST requests, empty otherwise
    pub body: String,
}

impl PreparedRequest {
    /// Resolve a method, path and body into wire form.
    pub fn new(method: Method, path: &str, body: &RequestBody) -> Result<Self, OkxError> {
        match method {
            Method::Get => {
                let query = body.to_query_string()?;
                let request_path = if query.is_empty() {
                    path.to_string()
                } else {
                    format!("{path}?{query}")
                };
                Ok(Self {
                    method,
                    request_path,
                    body: String::new(),
                })
            }
            Method::Post => Ok(Self {
                method,
                request_path: path.to_string(),
                body: body.to_json_string()?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        ccy: Option<&'a str>,
        sub_acct: &'a str,
        limit: u32,
        enable: Option<bool>,
    }

    #[test]
    fn test_method_from_str_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Post".parse::<Method>().unwrap(), Method::Post);
        assert!("DELETE".parse::<Method>().is_err());
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_from_params_drops_unset_fields() {
        let body = RequestBody::from_params(&Params {
            ccy: None,
            sub_acct: "alpha",
            limit: 100,
            enable: None,
        })
        .unwrap();

        let RequestBody::Params(map) = body else {
            panic!("expected params");
        };
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("ccy"));
        assert!(!map.contains_key("enable"));
    }

    #[test]
    fn test_from_params_keeps_falsy_values() {
        let body = RequestBody::from_params(&Params {
            ccy: Some(""),
            sub_acct: "alpha",
            limit: 0,
            enable: Some(false),
        })
        .unwrap();

        assert_eq!(
            body.to_query_string().unwrap(),
            "ccy=&enable=false&limit=0&subAcct=alpha"
        );
    }

    #[test]
    fn test_from_params_rejects_non_object() {
        assert!(RequestBody::from_params(&42).is_err());
        assert_eq!(RequestBody::from_params(&()).unwrap(), RequestBody::Empty);
    }

    #[test]
    fn test_get_moves_params_into_query() {
        let body = RequestBody::from_params(&serde_json::json!({
            "ccy": "BTC,ETH",
            "note": "a b&c",
        }))
        .unwrap();
        let prepared = PreparedRequest::new(Method::Get, "/api/v5/asset/balances", &body).unwrap();

        assert_eq!(
            prepared.request_path,
            "/api/v5/asset/balances?ccy=BTC%2CETH&note=a+b%26c"
        );
        assert!(prepared.body.is_empty());
    }

    #[test]
    fn test_get_without_params_keeps_path() {
        let prepared =
            PreparedRequest::new(Method::Get, "/api/v5/asset/balances", &RequestBody::Empty)
                .unwrap();
        assert_eq!(prepared.request_path, "/api/v5/asset/balances");
        assert!(prepared.body.is_empty());
    }

    #[test]
    fn test_post_serializes_sorted_json() {
        let body = RequestBody::from_params(&serde_json::json!({
            "to": "6",
            "amt": "1.5",
            "ccy": "USDT",
            "from": "18",
        }))
        .unwrap();
        let first = PreparedRequest::new(Method::Post, "/api/v5/asset/transfer", &body).unwrap();
        let second = PreparedRequest::new(Method::Post, "/api/v5/asset/transfer", &body).unwrap();

        assert_eq!(first.request_path, "/api/v5/asset/transfer");
        assert_eq!(
            first.body,
            r#"{"amt":"1.5","ccy":"USDT","from":"18","to":"6"}"#
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_body_is_sent_verbatim() {
        let raw = RequestBody::from(r#"{"wdId":"1"}"#);
        let prepared = PreparedRequest::new(Method::Post, "/api/v5/asset/cancel-withdrawal", &raw)
            .unwrap();
        assert_eq!(prepared.body, r#"{"wdId":"1"}"#);

        let raw_query = RequestBody::from("ccy=BTC");
        let prepared =
            PreparedRequest::new(Method::Get, "/api/v5/asset/balances", &raw_query).unwrap();
        assert_eq!(prepared.request_path, "/api/v5/asset/balances?ccy=BTC");
    }
}
