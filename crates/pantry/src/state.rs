//! Shared application state.
//!
//! Cloned into every handler. Holds no open connection: each request opens
//! its own through `StoreConnection`.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use pantry_lookup::{BarcodeClient, ProductLookup};

use crate::config::Config;
use crate::storage::SqliteStore;

#[derive(Clone)]
pub struct AppState {
    /// Store accessor.
    pub store: SqliteStore,
    /// Barcode database client.
    pub lookup: Arc<dyn ProductLookup>,
    /// Key used to sign flash cookies.
    pub cookie_key: Key,
    /// Upper bound on the duration of a single request.
    pub request_timeout: Duration,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl AppState {
    /// Creates a new AppState from the given parts.
    pub fn new(
        store: SqliteStore,
        lookup: Arc<dyn ProductLookup>,
        cookie_key: Key,
        request_timeout: Duration,
    ) -> Self {
        Self {
            store,
            lookup,
            cookie_key,
            request_timeout,
        }
    }

    /// Opens the store and builds the lookup client described by `config`.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = SqliteStore::open(&config.store_path)
            .await
            .with_context(|| format!("Failed to open store at {}", config.store_path))?;

        let lookup = Arc::new(BarcodeClient::new(&config.external_api_base_url));

        let cookie_key = match &config.signing_secret {
            Some(secret) => Key::try_from(secret.as_bytes())
                .context("Failed to derive cookie signing key")?,
            None => {
                tracing::warn!(
                    "PANTRY_SIGNING_SECRET not set, using a random key; flash messages will not survive a restart"
                );
                Key::generate()
            }
        };

        tracing::info!(
            store = %store.path().display(),
            lookup = %config.external_api_base_url,
            timeout_seconds = config.request_timeout_seconds,
            "Application state ready"
        );

        Ok(Self::new(store, lookup, cookie_key, config.request_timeout()))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use pantry_lookup::{LookupError, ProductInfo};
    use tempfile::TempDir;

    use super::*;

    /// Lookup double answering from a fixed table.
    pub(crate) struct StubLookup;

    #[async_trait]
    impl ProductLookup for StubLookup {
        async fn lookup(&self, barcode: &str) -> pantry_lookup::Result<ProductInfo> {
            match barcode {
                "3017620422003" => Ok(ProductInfo {
                    barcode: barcode.to_string(),
                    name: Some("Nutella".to_string()),
                }),
                "0000000000000" => Err(LookupError::Status { status: 500 }),
                _ => Err(LookupError::NotFound),
            }
        }
    }

    impl AppState {
        /// State over a fresh store in a temporary directory.
        pub(crate) async fn for_tests() -> (TempDir, Self) {
            let dir = tempfile::tempdir().unwrap();
            let store = SqliteStore::open(dir.path().join("pantry.db")).await.unwrap();
            let state = Self::new(
                store,
                Arc::new(StubLookup),
                Key::generate(),
                Duration::from_secs(10),
            );
            (dir, state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config_with_secret() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            store_path: dir.path().join("pantry.db").display().to_string(),
            external_api_base_url: "http://127.0.0.1:1".to_string(),
            signing_secret: Some("k".repeat(64)),
            request_timeout_seconds: 3,
        };

        let state = AppState::from_config(&config).await.unwrap();

        assert_eq!(state.request_timeout, Duration::from_secs(3));
        assert_eq!(state.store.path(), dir.path().join("pantry.db"));
        assert_eq!(
            state.cookie_key.master(),
            Key::from(&[b'k'; 64][..]).master()
        );
    }

    #[tokio::test]
    async fn test_from_config_bad_store_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            store_path: dir.path().join("missing").join("pantry.db").display().to_string(),
            external_api_base_url: "http://127.0.0.1:1".to_string(),
            signing_secret: None,
            request_timeout_seconds: 10,
        };

        assert!(AppState::from_config(&config).await.is_err());
    }
}
