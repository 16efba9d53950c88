//! Axum extractor for a per-request store connection.

use std::ops::Deref;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::handlers::AppError;
use crate::state::AppState;
use crate::storage::SqliteRepository;

/// A store connection owned by the current request.
///
/// Opened before the handler runs and closed when the handler returns,
/// whichever way it returns.
pub struct StoreConnection(pub SqliteRepository);

impl Deref for StoreConnection {
    type Target = SqliteRepository;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for StoreConnection {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let repo = state.store.connect().await?;
        Ok(Self(repo))
    }
}
