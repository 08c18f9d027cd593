use anyhow::{bail, Context, Result};

/// Which `PromptStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default so the service starts against a local compose stack.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_host: String,
    pub mongo_port: u16,
    pub mongo_db: String,
    pub mongo_user: String,
    pub mongo_pass: String,
    pub mongo_collection: String,
    pub store_backend: StoreBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store_backend = match var("STORE_BACKEND", "mongo").to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => StoreBackend::Mongo,
            "memory" => StoreBackend::Memory,
            other => bail!("STORE_BACKEND must be 'mongo' or 'memory', got '{other}'"),
        };

        Ok(Config {
            mongo_host: var("MONGO_HOST", "mongodb"),
            mongo_port: var("MONGO_PORT", "27017")
                .parse::<u16>()
                .context("MONGO_PORT must be a valid port number")?,
            mongo_db: var("MONGO_DB", "prompts_db"),
            mongo_user: var("MONGO_USER", "admin"),
            mongo_pass: var("MONGO_PASS", "password"),
            mongo_collection: var("MONGO_COLLECTION", "prompts"),
            store_backend,
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
        })
    }
}
