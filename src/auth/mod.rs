//! Authentication module for OKX API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Request timestamps for the `OK-ACCESS-TIMESTAMP` header
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, PASSPHRASE_VAR, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use signature::sign_request;
pub use timestamp::{FixedTimestamp, SystemClock, TimestampProvider, format_timestamp};
