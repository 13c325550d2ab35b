//! Sub-account types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::serde_helpers::{display_fromstr, empty_string_as_none};

/// Filters for the sub-account list.
///
/// `after` and `before` accept seconds or milliseconds; 10-digit values are
/// promoted to milliseconds before sending.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountListRequest {
    /// `true` for normal sub-accounts, `false` for frozen ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Sub-account name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_acct: Option<String>,
    /// Accounts created before this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    /// Accounts created after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    /// Number of results, at most 100
    pub limit: u32,
}

impl Default for SubaccountListRequest {
    fn default() -> Self {
        Self {
            enable: None,
            sub_acct: None,
            after: None,
            before: None,
            limit: 100,
        }
    }
}

/// A sub-account of the master account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountInfo {
    /// Sub-account type code (`1` standard, `2` managed trading, ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    /// `true` when the sub-account is active, `false` when frozen
    pub enable: bool,
    /// Sub-account name
    pub sub_acct: String,
    /// Sub-account UID
    #[serde(default)]
    pub uid: String,
    /// Sub-account note
    #[serde(default)]
    pub label: String,
    /// Bound mobile number
    #[serde(with = "empty_string_as_none", default)]
    pub mobile: Option<String>,
    /// Whether Google Authenticator is enabled
    #[serde(default)]
    pub g_auth: bool,
    /// Frozen functions, e.g. `trading`
    #[serde(default)]
    pub frozen_func: Vec<String>,
    /// Whether funds can be transferred out
    #[serde(default)]
    pub can_trans_out: bool,
    /// Creation time, UNIX milliseconds
    #[serde(with = "display_fromstr")]
    pub ts: u64,
    /// Fields not modelled above, kept as received
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_defaults_to_limit_100() {
        let json = serde_json::to_value(SubaccountListRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 100}));
    }

    #[test]
    fn test_subaccount_info_deserialize() {
        let json = serde_json::json!({
            "type": "1",
            "enable": true,
            "subAcct": "alpha",
            "uid": "446556018520336384",
            "label": "hedging",
            "mobile": "",
            "gAuth": false,
            "frozenFunc": [],
            "canTransOut": true,
            "ts": "1597026383085"
        });
        let info: SubaccountInfo = serde_json::from_value(json).unwrap();

        assert_eq!(info.kind, "1");
        assert_eq!(info.sub_acct, "alpha");
        assert!(info.enable);
        assert!(info.mobile.is_none());
        assert!(info.frozen_func.is_empty());
        assert_eq!(info.ts, 1_597_026_383_085);
    }
}
