use donation_ledger::{
    bot::{self, BotData},
    config::{database, fund},
    core::{ledger::Ledger, state_store::DatabaseStore},
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the fund catalog
    let fund_config = fund::load_default_config()
        .inspect(|c| info!("Loaded fund catalog with {} tools.", c.tools.len()))
        .inspect_err(|e| error!("Failed to load fund configuration: {}", e))?;

    // 4. Open storage. The ledger works without it, so failures only degrade it.
    let store = match open_store().await {
        Ok(store) => store,
        Err(e) => {
            warn!(
                "Storage unavailable at {}, ledger will be kept in memory only: {}",
                database::get_database_url(),
                e
            );
            DatabaseStore::detached()
        }
    };

    // 5. Start from an empty ledger, overwriting whatever a previous run persisted
    let mut ledger = Ledger::new(store);
    ledger.initialize().await;
    info!("Ledger initialized.");

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(ledger, fund_config)).await
}

async fn open_store() -> Result<DatabaseStore> {
    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!("Database initialized successfully.");
    Ok(DatabaseStore::new(db))
}
