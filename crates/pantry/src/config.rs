use std::{env, time::Duration};

use pantry_lookup::DEFAULT_BASE_URL;
use thiserror::Error;

/// Minimum length of the cookie signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 64;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PANTRY_SIGNING_SECRET must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    SecretTooShort(usize),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "pantry.db")
    pub store_path: String,
    /// Base URL of the barcode database (default: Open Food Facts)
    pub external_api_base_url: String,
    /// Secret used to sign cookies. A random key is used when absent.
    pub signing_secret: Option<String>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("store_path", &self.store_path)
            .field("external_api_base_url", &self.external_api_base_url)
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PANTRY_STORE_PATH` - SQLite database path (default: "pantry.db")
    /// - `PANTRY_API_BASE_URL` - barcode database URL (default: "https://world.openfoodfacts.net")
    /// - `PANTRY_SIGNING_SECRET` - cookie signing secret, at least 64 bytes (optional)
    /// - `PANTRY_REQUEST_TIMEOUT_SECONDS` - request timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_source<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_secret = var("PANTRY_SIGNING_SECRET").filter(|s| !s.is_empty());
        if let Some(secret) = &signing_secret {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::SecretTooShort(secret.len()));
            }
        }

        let request_timeout_seconds = match var("PANTRY_REQUEST_TIMEOUT_SECONDS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "PANTRY_REQUEST_TIMEOUT_SECONDS",
                value,
            })?,
            None => 10,
        };

        Ok(Self {
            store_path: var("PANTRY_STORE_PATH").unwrap_or_else(|| "pantry.db".to_string()),
            external_api_base_url: var("PANTRY_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            signing_secret,
            request_timeout_seconds,
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
