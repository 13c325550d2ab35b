//! Types for the funding account (`asset`) endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::serde_helpers::{
    display_fromstr, empty_string_as_none, maybe_decimal, optional_display_fromstr,
};
use crate::types::{AccountType, FundingKind, TransferType, WithdrawalDestination, chain_id};

/// A currency on one chain, as listed by the currencies endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Currency symbol, e.g. `USDT`
    pub ccy: String,
    /// Currency name
    #[serde(default)]
    pub name: String,
    /// Logo URL
    #[serde(default)]
    pub logo_link: String,
    /// Full chain id, e.g. `USDT-Arbitrum One`
    pub chain: String,
    /// Deposits enabled
    #[serde(default)]
    pub can_dep: bool,
    /// Withdrawals enabled
    #[serde(default)]
    pub can_wd: bool,
    /// Internal transfers enabled
    #[serde(default)]
    pub can_internal: bool,
    /// Minimum deposit amount
    #[serde(with = "maybe_decimal", default)]
    pub min_dep: Option<Decimal>,
    /// Minimum withdrawal amount
    #[serde(with = "maybe_decimal", default)]
    pub min_wd: Option<Decimal>,
    /// Maximum withdrawal amount
    #[serde(with = "maybe_decimal", default)]
    pub max_wd: Option<Decimal>,
    /// Withdrawal precision, in decimal places
    #[serde(with = "optional_display_fromstr", default)]
    pub wd_tick_sz: Option<u32>,
    /// 24h withdrawal limit in USD
    #[serde(with = "maybe_decimal", default)]
    pub wd_quota: Option<Decimal>,
    /// Withdrawal quota used in the past 24h, in USD
    #[serde(with = "maybe_decimal", default)]
    pub used_wd_quota: Option<Decimal>,
    /// Minimum withdrawal fee
    #[serde(with = "maybe_decimal", default)]
    pub min_fee: Option<Decimal>,
    /// Maximum withdrawal fee
    #[serde(with = "maybe_decimal", default)]
    pub max_fee: Option<Decimal>,
    /// Whether this chain is the currency's main network
    #[serde(default)]
    pub main_net: bool,
    /// Whether deposits require a tag or memo
    #[serde(default)]
    pub need_tag: bool,
    /// Confirmations needed before a deposit is credited
    #[serde(with = "optional_display_fromstr", default)]
    pub min_dep_arrival_confirm: Option<u64>,
    /// Confirmations needed before a deposit can be withdrawn
    #[serde(with = "optional_display_fromstr", default)]
    pub min_wd_unlock_confirm: Option<u64>,
    /// Fields not modelled above, kept as received
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Currency {
    /// Chain name without the currency prefix (`Arbitrum One` for `USDT-Arbitrum One`).
    pub fn chain_name(&self) -> &str {
        crate::types::chain_name(&self.ccy, &self.chain)
    }
}

/// Balance of one token in a funding account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingToken {
    /// Currency symbol
    pub ccy: String,
    /// Total balance
    pub bal: Decimal,
    /// Frozen balance
    pub frozen_bal: Decimal,
    /// Available balance
    pub avail_bal: Decimal,
    /// Fields not modelled above, kept as received
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Request to withdraw funds.
///
/// `chain` takes the chain *name* (see [`chains`](crate::types::chains)); the
/// full `"{ccy}-{chain}"` id is built for the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    /// Currency symbol
    pub ccy: String,
    /// Amount to withdraw, excluding fee
    pub amt: Decimal,
    /// On-chain or internal
    pub dest: WithdrawalDestination,
    /// Destination address, or account identifier for internal transfers
    pub to_addr: String,
    /// Transaction fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    /// Full chain id, e.g. `USDT-Arbitrum One`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Area code of the phone number, for internal transfers to a phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Client-supplied id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl WithdrawalRequest {
    /// Create an on-chain withdrawal request.
    pub fn new(ccy: impl Into<String>, amt: Decimal, to_addr: impl Into<String>) -> Self {
        Self {
            ccy: ccy.into(),
            amt,
            dest: WithdrawalDestination::default(),
            to_addr: to_addr.into(),
            fee: None,
            chain: None,
            area_code: None,
            client_id: None,
        }
    }

    /// Withdraw over the named chain, e.g. [`chains::ARBITRUM_ONE`](crate::types::chains::ARBITRUM_ONE).
    pub fn chain(mut self, chain_name: &str) -> Self {
        self.chain = Some(chain_id(&self.ccy, chain_name));
        self
    }

    /// Set the transaction fee.
    pub fn fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }

    /// Set the destination kind.
    pub fn dest(mut self, dest: WithdrawalDestination) -> Self {
        self.dest = dest;
        self
    }

    /// Set the client-supplied id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Result of a submitted withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalReceipt {
    /// Currency symbol
    pub ccy: String,
    /// Full chain id
    #[serde(default)]
    pub chain: String,
    /// Amount withdrawn
    pub amt: Decimal,
    /// Withdrawal id
    pub wd_id: String,
    /// Client-supplied id
    #[serde(with = "empty_string_as_none", default)]
    pub client_id: Option<String>,
}

/// Result of a withdrawal cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledWithdrawal {
    /// Withdrawal id
    pub wd_id: String,
}

/// Filters for the withdrawal history.
///
/// `after` and `before` accept seconds or milliseconds; 10-digit values are
/// promoted to milliseconds before sending.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalHistoryRequest {
    /// Currency symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccy: Option<String>,
    /// Withdrawal id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wd_id: Option<String>,
    /// Client-supplied id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Hash record on the chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Internal or on-chain
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FundingKind>,
    /// Withdrawal state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    /// Records earlier than this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    /// Records newer than this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    /// Number of results, at most 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One entry of the withdrawal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecord {
    /// Currency symbol
    pub ccy: String,
    /// Full chain id
    #[serde(default)]
    pub chain: String,
    /// Amount withdrawn
    pub amt: Decimal,
    /// Creation time, UNIX milliseconds
    #[serde(with = "display_fromstr")]
    pub ts: u64,
    /// Sending account
    #[serde(with = "empty_string_as_none", default)]
    pub from: Option<String>,
    /// Receiving address or account
    #[serde(with = "empty_string_as_none", default)]
    pub to: Option<String>,
    /// Tag, for currencies that need one
    #[serde(with = "empty_string_as_none", default)]
    pub tag: Option<String>,
    /// Payment id, for currencies that need one
    #[serde(with = "empty_string_as_none", default)]
    pub pmt_id: Option<String>,
    /// Memo, for currencies that need one
    #[serde(with = "empty_string_as_none", default)]
    pub memo: Option<String>,
    /// Hash record on the chain
    #[serde(with = "empty_string_as_none", default)]
    pub tx_id: Option<String>,
    /// Withdrawal fee
    #[serde(with = "maybe_decimal", default)]
    pub fee: Option<Decimal>,
    /// Currency the fee is paid in
    #[serde(with = "empty_string_as_none", default)]
    pub fee_ccy: Option<String>,
    /// Withdrawal state code
    #[serde(with = "display_fromstr")]
    pub state: i32,
    /// Withdrawal id
    pub wd_id: String,
    /// Client-supplied id
    #[serde(with = "empty_string_as_none", default)]
    pub client_id: Option<String>,
    /// Fields not modelled above, kept as received
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl WithdrawalRecord {
    /// Withdrawal completed.
    pub fn is_successful(&self) -> bool {
        self.state == 2
    }

    /// Withdrawal failed or was canceled.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, -2 | -1)
    }
}

/// Filters for the deposit history.
///
/// `after` and `before` accept seconds or milliseconds; 10-digit values are
/// promoted to milliseconds before sending.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositHistoryRequest {
    /// Currency symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccy: Option<String>,
    /// Deposit id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_id: Option<String>,
    /// Withdrawal id of the internal transfer that funded the deposit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_wd_id: Option<String>,
    /// Hash record on the chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Internal or on-chain
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FundingKind>,
    /// Deposit state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    /// Records earlier than this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    /// Records newer than this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    /// Number of results, at most 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One entry of the deposit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Currency symbol
    pub ccy: String,
    /// Full chain id
    #[serde(default)]
    pub chain: String,
    /// Amount deposited
    pub amt: Decimal,
    /// Sending account, for internal transfers
    #[serde(with = "empty_string_as_none", default)]
    pub from: Option<String>,
    /// Deposit address
    #[serde(with = "empty_string_as_none", default)]
    pub to: Option<String>,
    /// Hash record on the chain
    #[serde(with = "empty_string_as_none", default)]
    pub tx_id: Option<String>,
    /// Time the deposit was credited, UNIX milliseconds
    #[serde(with = "display_fromstr")]
    pub ts: u64,
    /// Deposit state code
    #[serde(with = "display_fromstr")]
    pub state: i32,
    /// Deposit id
    pub dep_id: String,
    /// Withdrawal id of the internal transfer that funded the deposit
    #[serde(with = "empty_string_as_none", default)]
    pub from_wd_id: Option<String>,
    /// Block confirmations observed so far
    #[serde(with = "optional_display_fromstr", default)]
    pub actual_dep_blk_confirm: Option<u64>,
    /// Fields not modelled above, kept as received
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl DepositRecord {
    /// Deposit credited and withdrawable.
    pub fn is_successful(&self) -> bool {
        self.state == 2
    }
}

/// Request to move funds between funding and trading accounts or between
/// master and sub-accounts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Currency symbol
    pub ccy: String,
    /// Amount to transfer
    pub amt: Decimal,
    /// Source account
    pub from: AccountType,
    /// Destination account
    pub to: AccountType,
    /// Sub-account name, required for master/sub-account transfers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_acct: Option<String>,
    /// Transfer direction
    #[serde(rename = "type")]
    pub kind: TransferType,
    /// Whether borrowed coins may be transferred out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_trans: Option<bool>,
    /// Client-supplied id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl TransferRequest {
    /// Create a transfer within the same account.
    pub fn new(ccy: impl Into<String>, amt: Decimal, from: AccountType, to: AccountType) -> Self {
        Self {
            ccy: ccy.into(),
            amt,
            from,
            to,
            sub_acct: None,
            kind: TransferType::default(),
            loan_trans: None,
            client_id: None,
        }
    }

    /// Transfer to or from a sub-account.
    pub fn sub_account(mut self, sub_acct: impl Into<String>, kind: TransferType) -> Self {
        self.sub_acct = Some(sub_acct.into());
        self.kind = kind;
        self
    }

    /// Set the client-supplied id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Result of a funds transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    /// Transfer id
    pub trans_id: String,
    /// Currency symbol
    pub ccy: String,
    /// Amount transferred
    pub amt: Decimal,
    /// Source account type code
    pub from: String,
    /// Destination account type code
    pub to: String,
    /// Client-supplied id
    #[serde(with = "empty_string_as_none", default)]
    pub client_id: Option<String>,
}
