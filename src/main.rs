//! Binary entry point for the Tradovate stdio bridge.

use tracing_subscriber::EnvFilter;

use tradovate_bridge::auth::Credentials;
use tradovate_bridge::models::Environment;
use tradovate_bridge::{Bridge, ClientConfig, TradovateClient};

#[tokio::main]
async fn main() -> tradovate_bridge::Result<()> {
    dotenvy::dotenv().ok();

    // Stdout carries the protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let environment = match std::env::var("TRADOVATE_ENVIRONMENT")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "demo" => Environment::Demo,
        _ => Environment::Live,
    };

    let credentials = Credentials::from_env()?;
    let config = ClientConfig::default().with_environment(environment);
    let client = TradovateClient::new(config, credentials)?;

    tracing::info!(%environment, "tradovate bridge listening on stdio");
    Bridge::new(client).run().await
}
