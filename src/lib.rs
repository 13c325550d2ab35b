//! # OKX Client
//!
//! An async Rust client library for the OKX exchange REST API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing
//! - Funding account endpoints: currencies, balances, withdrawals, deposits
//!   and transfers
//! - Sub-account listing and balances
//! - HTTP and SOCKS5 proxy support
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use okx_api_client::rest::OkxRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OKX_API_KEY, OKX_SECRET_KEY and OKX_PASSPHRASE.
//!     let client = OkxRestClient::from_env()?;
//!     let balances = client.balances(Some("USDT")).await?;
//!     println!("Balances: {:?}", balances);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, OkxError};
pub use rest::{ClientConfig, OkxRestClient};
pub use types::common::{AccountType, TransferType, WithdrawalDestination};

/// Result type alias using OkxError
pub type Result<T> = std::result::Result<T, OkxError>;
