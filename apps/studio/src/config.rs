use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which backend holds the resume record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("Unknown STORE_BACKEND '{other}' (expected file, redis or memory)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Everything has a default except `REDIS_URL`, which the redis backend requires.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    pub store_dir: PathBuf,
    pub redis_url: Option<String>,
    pub converter_url: String,
    pub converter_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            store_backend: env_or("STORE_BACKEND", "file").parse()?,
            store_dir: PathBuf::from(env_or("STORE_DIR", ".studio")),
            redis_url: std::env::var("REDIS_URL").ok(),
            converter_url: env_or(
                "CONVERTER_URL",
                "http://localhost:3000/forms/chromium/convert/html",
            ),
            converter_timeout_secs: env_or("CONVERTER_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("CONVERTER_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parses_case_insensitively() {
        assert_eq!("File".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!(" redis ".parse::<StoreBackend>().unwrap(), StoreBackend::Redis);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
    }

    #[test]
    fn test_unknown_store_backend_is_rejected() {
        let err = "localStorage".parse::<StoreBackend>().unwrap_err();
        assert!(err.to_string().contains("localstorage"));
    }
}
