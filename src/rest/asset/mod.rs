//! Funding account endpoints.
//!
//! These endpoints require API credentials with read permission; withdrawals
//! and transfers additionally need the withdraw or trade permission.

pub mod types;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::OkxError;
use crate::rest::OkxRestClient;
use crate::rest::client::{key_by, single};
use crate::rest::endpoints::asset as endpoints;
use crate::types::secs_to_millisecs;

pub use types::*;

#[derive(Serialize)]
struct CcyParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ccy: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelWithdrawalParams<'a> {
    wd_id: &'a str,
}

impl OkxRestClient {
    /// Get currencies and the chains they can be deposited or withdrawn on.
    ///
    /// Returns a map of currency -> chain name -> details. Chain names have the
    /// currency prefix stripped (`Arbitrum One` rather than `USDT-Arbitrum One`).
    ///
    /// # Arguments
    ///
    /// * `ccy` - Single currency or comma-separated list, e.g. `BTC,ETH`
    pub async fn currencies(
        &self,
        ccy: Option<&str>,
    ) -> Result<HashMap<String, HashMap<String, Currency>>, OkxError> {
        let records: Vec<Currency> = self
            .private_get(endpoints::CURRENCIES, &CcyParams { ccy })
            .await?;

        let mut currencies: HashMap<String, HashMap<String, Currency>> = HashMap::new();
        for currency in records {
            let chain = currency.chain_name().to_string();
            currencies
                .entry(currency.ccy.clone())
                .or_default()
                .insert(chain, currency);
        }
        Ok(currencies)
    }

    /// Get funding account balances, keyed by currency.
    ///
    /// # Arguments
    ///
    /// * `ccy` - Single currency or comma-separated list
    pub async fn balances(
        &self,
        ccy: Option<&str>,
    ) -> Result<HashMap<String, FundingToken>, OkxError> {
        let records: Vec<FundingToken> = self
            .private_get(endpoints::BALANCES, &CcyParams { ccy })
            .await?;
        Ok(key_by(records, |token| token.ccy.as_str()))
    }

    /// Submit a withdrawal.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use okx_api_client::rest::OkxRestClient;
    /// use okx_api_client::rest::asset::WithdrawalRequest;
    /// use okx_api_client::types::chains;
    /// use rust_decimal::Decimal;
    ///
    /// # async fn example(client: OkxRestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = WithdrawalRequest::new("USDT", Decimal::new(25, 0), "0x0000000000000000000000000000000000000000")
    ///     .chain(chains::ARBITRUM_ONE)
    ///     .fee(Decimal::new(1, 1));
    /// let receipt = client.withdrawal(&request).await?;
    /// println!("withdrawal id: {}", receipt.wd_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<WithdrawalReceipt, OkxError> {
        let records = self.private_post(endpoints::WITHDRAWAL, request).await?;
        single(records, endpoints::WITHDRAWAL)
    }

    /// Cancel a pending withdrawal.
    pub async fn cancel_withdrawal(&self, wd_id: &str) -> Result<CancelledWithdrawal, OkxError> {
        let records = self
            .private_post(endpoints::CANCEL_WITHDRAWAL, &CancelWithdrawalParams { wd_id })
            .await?;
        single(records, endpoints::CANCEL_WITHDRAWAL)
    }

    /// Get withdrawal history, keyed by withdrawal id.
    pub async fn withdrawal_history(
        &self,
        request: &WithdrawalHistoryRequest,
    ) -> Result<HashMap<String, WithdrawalRecord>, OkxError> {
        let mut params = request.clone();
        params.after = params.after.map(secs_to_millisecs);
        params.before = params.before.map(secs_to_millisecs);

        let records: Vec<WithdrawalRecord> = self
            .private_get(endpoints::WITHDRAWAL_HISTORY, &params)
            .await?;
        Ok(key_by(records, |record| record.wd_id.as_str()))
    }

    /// Get deposit history, keyed by deposit id.
    pub async fn deposit_history(
        &self,
        request: &DepositHistoryRequest,
    ) -> Result<HashMap<String, DepositRecord>, OkxError> {
        let mut params = request.clone();
        params.after = params.after.map(secs_to_millisecs);
        params.before = params.before.map(secs_to_millisecs);

        let records: Vec<DepositRecord> = self
            .private_get(endpoints::DEPOSIT_HISTORY, &params)
            .await?;
        Ok(key_by(records, |record| record.dep_id.as_str()))
    }

    /// Transfer funds between funding and trading accounts, or between master
    /// and sub-accounts.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferReceipt, OkxError> {
        let records = self.private_post(endpoints::TRANSFER, request).await?;
        single(records, endpoints::TRANSFER)
    }
}
