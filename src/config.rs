use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub log_dir: String,

    /// Exposes `GET /seed_db`, which drops and repopulates the employees table.
    pub seed_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_enabled = var("SEED_ENABLED").unwrap_or_else(|| "true".to_string());

        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            seed_enabled: seed_enabled
                .parse()
                .with_context(|| format!("SEED_ENABLED must be true or false, got {seed_enabled:?}"))?,
        })
    }
}
