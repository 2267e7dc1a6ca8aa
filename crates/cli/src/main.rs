use anyhow::Result;
use tracing::{error, info};

use client_manager::{config, logging, script};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    logging::init_logging(&config.logging);

    info!("Starting client manager v{}", env!("CARGO_PKG_VERSION"));

    let mut conn = persistence::db::connect(&config.database).await?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = script::run(&mut conn, &mut stdout).await {
        error!(error = %e, "Demo run aborted");
        return Err(e);
    }

    info!("Demo run completed");
    Ok(())
}
