//! Database connection management.

use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use std::time::Duration;
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub database: String,

    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    5432
}
fn default_connect_timeout() -> u64 {
    10
}

impl DatabaseConfig {
    /// Builds connection options from the individual settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// Opens a single PostgreSQL connection with the given configuration.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<PgConnection> {
    let timeout = Duration::from_secs(config.connect_timeout_secs);
    let options = config.connect_options();

    let conn = tokio::time::timeout(timeout, options.connect())
        .await
        .map_err(|_| {
            StoreError::Connection(format!(
                "timed out after {}s connecting to {}:{}",
                config.connect_timeout_secs, config.host, config.port
            ))
        })??;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connected to database"
    );
    Ok(conn)
}
