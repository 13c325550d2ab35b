//! Common domain types for the OKX API.

use serde::{Deserialize, Serialize};

/// Account a transfer moves funds from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Funding account
    #[serde(rename = "6")]
    Funding,
    /// Trading account
    #[serde(rename = "18")]
    Trading,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Funding => write!(f, "6"),
            AccountType::Trading => write!(f, "18"),
        }
    }
}

/// Direction of a funds transfer between master and sub-accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferType {
    /// Transfer within the same account (default)
    #[default]
    #[serde(rename = "0")]
    WithinAccount,
    /// Master account to sub-account (master key only)
    #[serde(rename = "1")]
    MasterToSub,
    /// Sub-account to master account (master key only)
    #[serde(rename = "2")]
    SubToMaster,
    /// Sub-account to master account (sub-account key only)
    #[serde(rename = "3")]
    SubToMasterFromSub,
    /// Sub-account to sub-account (sub-account key only)
    #[serde(rename = "4")]
    SubToSub,
}

/// Where a withdrawal is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WithdrawalDestination {
    /// Internal transfer to another OKX account
    #[serde(rename = "3")]
    Internal,
    /// On-chain withdrawal (default)
    #[default]
    #[serde(rename = "4")]
    OnChain,
}

/// Kind of a deposit or withdrawal in the history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingKind {
    /// Internal transfer between OKX accounts
    #[serde(rename = "3")]
    Internal,
    /// On-chain transaction
    #[serde(rename = "4")]
    OnChain,
}

/// Well-known chain names, as they appear after the `"{ccy}-"` prefix of an
/// OKX chain id (`USDT-Arbitrum One` -> `Arbitrum One`).
pub mod chains {
    pub const ARBITRUM_ONE: &str = "Arbitrum One";
    pub const AVALANCHE_C: &str = "Avalanche C-Chain";
    pub const BSC: &str = "BSC";
    pub const BITCOIN: &str = "Bitcoin";
    pub const ERC20: &str = "ERC20";
    pub const OPTIMISM: &str = "Optimism";
    pub const POLYGON: &str = "Polygon";
    pub const SOLANA: &str = "Solana";
    pub const TRC20: &str = "TRC20";
    pub const ZKSYNC_ERA: &str = "zkSync Era";
}

/// Full OKX chain id for a token on a chain, e.g. `USDT-Arbitrum One`.
pub fn chain_id(ccy: &str, chain: &str) -> String {
    format!("{ccy}-{chain}")
}

/// Chain name from a full chain id, with the `"{ccy}-"` prefix removed.
///
/// Ids without the prefix are returned unchanged.
pub fn chain_name<'a>(ccy: &str, chain_id: &'a str) -> &'a str {
    chain_id
        .strip_prefix(ccy)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(chain_id)
}
