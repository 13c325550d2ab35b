//! OKX REST API.
//!
//! [`OkxRestClient`] signs and sends requests; the endpoint wrappers live in
//! [`asset`] and [`subaccount`] as inherent methods on the client.

pub mod asset;
mod client;
pub mod config;
pub mod endpoints;
mod proxy;
pub mod request;
pub mod subaccount;

pub use client::{
    HEADER_ACCESS_KEY, HEADER_ACCESS_PASSPHRASE, HEADER_ACCESS_SIGN, HEADER_ACCESS_TIMESTAMP,
    HEADER_SIMULATED_TRADING, OkxRestClient, OkxRestClientBuilder, ResponseEnvelope,
};
pub use config::ClientConfig;
pub use proxy::ProxyConfig;
pub use request::{Method, PreparedRequest, RequestBody};
