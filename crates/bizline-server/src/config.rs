use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("unknown LOG_FORMAT {other:?}, expected json or pretty"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub db_max_connections: u32,
    pub request_timeout_secs: u64,
    pub random_seed: Option<u64>,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://business.db".into()),
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            random_seed: env::var("RANDOM_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("RANDOM_SEED must be an unsigned integer")?,
            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "json".into()),
            )?,
            otlp_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
        })
    }

    /// Settings for an in-process store that disappears with the pool.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            bind_address: "127.0.0.1:0".into(),
            db_max_connections: 1,
            request_timeout_secs: 30,
            random_seed: None,
            log_format: LogFormat::Pretty,
            otlp_endpoint: None,
        }
    }
}
