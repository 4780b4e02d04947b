use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Directory holding one JSON file per collection
    pub data_dir: String,
    pub log_dir: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    /// Seed sample employees when the store is empty
    pub seed_sample_data: bool,
}

/// `key` parsed as `T`, or `default` when unset.
fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080".to_string())?,
            data_dir: var_or("DATA_DIR", "data".to_string())?,
            log_dir: var_or("LOG_DIR", "logs".to_string())?,
            api_prefix: var_or("API_PREFIX", "/api".to_string())?,
            rate_api_per_min: var_or("RATE_API_PER_MIN", 1000)?,
            seed_sample_data: var_or("SEED_SAMPLE_DATA", true)?,
        })
    }
}
