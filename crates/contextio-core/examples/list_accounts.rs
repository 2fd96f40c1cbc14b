//! List accounts and their sources
//!
//! Run with: CONTEXTIO_KEY=... CONTEXTIO_SECRET=... cargo run -p contextio-core --example list_accounts

use contextio_core::http::ApiConfig;
use contextio_core::Api;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("contextio_core=debug".parse()?))
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    let api = Api::from_config(&config)?;

    let accounts = api.accounts().fetch().await?;
    println!("Found {} accounts:\n", accounts.len());

    for account in &accounts {
        println!("Account: {}", account.key().unwrap_or("<no id>"));
        println!("  Name: {:?} {:?}", account.first_name().await?, account.last_name().await?);

        match account.sources().fetch().await {
            Ok(sources) => {
                for source in &sources {
                    println!(
                        "  Source: {} ({:?}, ssl={})",
                        source.key().unwrap_or("<no label>"),
                        source.server().await?,
                        source.uses_ssl().await?
                    );
                }
            }
            Err(e) => println!("  FAILED to list sources: {}", e),
        }
        println!();
    }

    Ok(())
}
