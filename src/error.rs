//! Error types for the OKX client library.

use thiserror::Error;

/// The main error type for all OKX client operations.
#[derive(Error, Debug)]
pub enum OkxError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// OKX API returned a non-zero `code`
    #[error("OKX API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Request parameters could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Proxy string could not be turned into a transport proxy
    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, secret key and passphrase required for private endpoints")]
    MissingCredentials,
}

/// An error reported by OKX in the response envelope.
///
/// OKX answers with `{"code": "51001", "msg": "...", "data": []}` on failure.
/// The raw body and HTTP status are kept for callers that need more than the
/// code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The OKX error code (e.g., 51001)
    pub code: Option<i64>,
    /// Human-readable error message
    pub msg: Option<String>,
    /// HTTP status of the response
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) if code != 0 => {
                write!(f, "{}, {}", code, self.msg.as_deref().unwrap_or_default())
            }
            _ => write!(f, "{} (HTTP)", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, msg: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            msg: Some(msg.into()),
            status: 200,
            body: String::new(),
        }
    }

    /// Build an error from a raw response.
    ///
    /// `code` and `msg` are taken from the body when it is a JSON envelope.
    /// When it is not, both stay `None` and the display form falls back to the
    /// HTTP status.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let (code, msg) = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => (
                value.get("code").and_then(parse_code),
                value.get("msg").and_then(|m| m.as_str()).map(str::to_string),
            ),
            Err(_) => (None, None),
        };
        Self {
            code,
            msg,
            status,
            body,
        }
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == Some(error_codes::RATE_LIMIT_EXCEEDED)
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_key(&self) -> bool {
        self.code == Some(error_codes::INVALID_API_KEY)
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == Some(error_codes::INVALID_SIGN)
    }

    /// Check if this is an invalid passphrase error.
    pub fn is_invalid_passphrase(&self) -> bool {
        self.code == Some(error_codes::INVALID_PASSPHRASE)
    }

    /// Check if the request timestamp was rejected as expired.
    pub fn is_timestamp_expired(&self) -> bool {
        self.code == Some(error_codes::TIMESTAMP_EXPIRED)
    }
}

/// Parse an envelope `code` that OKX sends as a string but may send as a number.
pub(crate) fn parse_code(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Known OKX error codes for pattern matching.
pub mod error_codes {
    /// Service temporarily unavailable
    pub const SERVICE_UNAVAILABLE: i64 = 50001;
    /// Request too frequent
    pub const RATE_LIMIT_EXCEEDED: i64 = 50011;
    /// System busy
    pub const SYSTEM_BUSY: i64 = 50013;
    /// Parameter is empty
    pub const PARAMETER_EMPTY: i64 = 50014;

    /// Request header `OK-ACCESS-TIMESTAMP` is expired
    pub const TIMESTAMP_EXPIRED: i64 = 50102;
    /// Invalid `OK-ACCESS-PASSPHRASE`
    pub const INVALID_PASSPHRASE: i64 = 50105;
    /// Invalid `OK-ACCESS-KEY`
    pub const INVALID_API_KEY: i64 = 50111;
    /// Invalid `OK-ACCESS-TIMESTAMP`
    pub const INVALID_TIMESTAMP: i64 = 50112;
    /// Invalid `OK-ACCESS-SIGN`
    pub const INVALID_SIGN: i64 = 50113;

    /// Instrument ID does not exist
    pub const INSTRUMENT_NOT_FOUND: i64 = 51001;

    /// Insufficient balance
    pub const INSUFFICIENT_BALANCE: i64 = 58350;
    /// Withdrawal address is not whitelisted
    pub const ADDRESS_NOT_WHITELISTED: i64 = 58207;
    /// Sub-account does not exist
    pub const SUBACCOUNT_NOT_FOUND: i64 = 59510;
}
