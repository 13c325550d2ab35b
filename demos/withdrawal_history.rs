use std::time::{SystemTime, UNIX_EPOCH};

use okx_api_client::error::OkxError;
use okx_api_client::rest::OkxRestClient;
use okx_api_client::rest::asset::{DepositHistoryRequest, WithdrawalHistoryRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = OkxRestClient::from_env()?;
    if !client.has_credentials() {
        println!("Set OKX_API_KEY, OKX_SECRET_KEY and OKX_PASSPHRASE to run this example.");
        return Ok(());
    }

    // Cursors may be given in seconds; they are sent as milliseconds.
    let week_ago = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() - 7 * 24 * 60 * 60;

    let withdrawals = WithdrawalHistoryRequest {
        before: Some(week_ago),
        ..Default::default()
    };
    match client.withdrawal_history(&withdrawals).await {
        Ok(history) => {
            for (wd_id, record) in &history {
                println!("withdrawal {wd_id}: {} {} state {}", record.amt, record.ccy, record.state);
            }
        }
        Err(OkxError::Api(e)) if e.is_rate_limit() => {
            println!("Rate limited: {e}");
        }
        Err(e) => return Err(e.into()),
    }

    let deposits = DepositHistoryRequest {
        before: Some(week_ago),
        ..Default::default()
    };
    let history = client.deposit_history(&deposits).await?;
    println!("Deposits in the last week: {}", history.len());

    Ok(())
}
