use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";
const DEFAULT_POOL_SIZE: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub max_pool_size: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_pool_size: lookup("MAX_POOL_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POOL_SIZE),
            acquire_timeout_secs: lookup("ACQUIRE_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}
