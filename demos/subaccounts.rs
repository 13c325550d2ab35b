use std::sync::Arc;

use okx_api_client::auth::EnvCredentials;
use okx_api_client::rest::OkxRestClient;
use okx_api_client::rest::subaccount::SubaccountListRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set OKX_API_KEY, OKX_SECRET_KEY and OKX_PASSPHRASE to run this example.");
            return Ok(());
        }
    };

    let client = OkxRestClient::builder().credentials(credentials).build()?;

    let subaccounts = client
        .list_subaccounts(&SubaccountListRequest::default())
        .await?;
    println!("Sub-accounts: {}", subaccounts.len());

    for name in subaccounts.keys() {
        let balances = client.subaccount_balances(name, None).await?;
        println!("{name}: {} currencies", balances.len());
    }

    Ok(())
}
