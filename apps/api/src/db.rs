use anyhow::{Context, Result};
use bson::doc;
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use tracing::info;

use crate::config::Config;

/// Connects to MongoDB and returns a handle to the configured database.
/// The returned handle is cheap to clone and shares one connection pool.
pub async fn connect(config: &Config) -> Result<Database> {
    info!(
        "Connecting to MongoDB at {}:{}...",
        config.mongo_host, config.mongo_port
    );

    let mut options = ClientOptions::parse(format!(
        "mongodb://{}:{}",
        config.mongo_host, config.mongo_port
    ))
    .await
    .context("Invalid MongoDB host or port")?;
    options.credential = Some(
        Credential::builder()
            .username(config.mongo_user.clone())
            .password(config.mongo_pass.clone())
            .source("admin".to_string())
            .build(),
    );
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    let database = client.database(&config.mongo_db);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB did not answer ping")?;

    info!("MongoDB connection established (database: {})", config.mongo_db);
    Ok(database)
}
