//! Sub-account endpoints. Only available to master-account API keys.

pub mod types;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::OkxError;
use crate::rest::OkxRestClient;
use crate::rest::asset::FundingToken;
use crate::rest::client::key_by;
use crate::rest::endpoints::{asset, users};
use crate::types::secs_to_millisecs;

pub use types::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubaccountBalancesParams<'a> {
    sub_acct: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ccy: Option<&'a str>,
}

impl OkxRestClient {
    /// List sub-accounts, keyed by sub-account name.
    pub async fn list_subaccounts(
        &self,
        request: &SubaccountListRequest,
    ) -> Result<HashMap<String, SubaccountInfo>, OkxError> {
        let mut params = request.clone();
        params.after = params.after.map(secs_to_millisecs);
        params.before = params.before.map(secs_to_millisecs);

        let records: Vec<SubaccountInfo> =
            self.private_get(users::SUBACCOUNT_LIST, &params).await?;
        Ok(key_by(records, |info| info.sub_acct.as_str()))
    }

    /// Get the funding account balances of a sub-account, keyed by currency.
    ///
    /// # Arguments
    ///
    /// * `sub_acct` - Sub-account name
    /// * `ccy` - Single currency or comma-separated list (at most 20)
    pub async fn subaccount_balances(
        &self,
        sub_acct: &str,
        ccy: Option<&str>,
    ) -> Result<HashMap<String, FundingToken>, OkxError> {
        let records: Vec<FundingToken> = self
            .private_get(
                asset::SUBACCOUNT_BALANCES,
                &SubaccountBalancesParams { sub_acct, ccy },
            )
            .await?;
        Ok(key_by(records, |token| token.ccy.as_str()))
    }
}
