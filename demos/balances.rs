use std::sync::Arc;

use okx_api_client::auth::EnvCredentials;
use okx_api_client::rest::{ClientConfig, OkxRestClient};
use okx_api_client::types::chains;

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

    let client = OkxRestClient::builder()
        .config(ClientConfig::from_env())
        .credentials(credentials)
        .build()?;

    let balances = client.balances(None).await?;
    for (ccy, token) in &balances {
        println!("{ccy}: {} available, {} frozen", token.avail_bal, token.frozen_bal);
    }

    let currencies = client.currencies(Some("USDT")).await?;
    if let Some(arbitrum) = currencies
        .get("USDT")
        .and_then(|by_chain| by_chain.get(chains::ARBITRUM_ONE))
    {
        println!(
            "USDT on {}: min withdrawal {:?}, fee {:?}",
            arbitrum.chain_name(),
            arbitrum.min_wd,
            arbitrum.min_fee
        );
    }

    Ok(())
}
