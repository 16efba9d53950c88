//! Store accessor: hands out one SQLite connection per request.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio_rusqlite::Connection;

use pantry_core::storage::{RepositoryError, Result};

use super::error::map_open_error;
use super::repository::{wrap_err, SqliteRepository};

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the on-disk database.
///
/// Holds no open connection itself; every call to [`SqliteStore::connect`]
/// opens a fresh one that is closed when the returned repository is dropped.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the store at `path`, creating the file and schema if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };

        let repo = store.connect().await?;
        repo.init_schema().await?;

        tracing::info!(path = %store.path.display(), "Store ready");
        Ok(store)
    }

    /// Handle to `path` without touching the file.
    #[cfg(test)]
    pub(crate) fn unchecked(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a new connection configured for this store.
    pub async fn connect(&self) -> Result<SqliteRepository> {
        let conn = Connection::open(&self.path).await.map_err(map_open_error)?;

        conn.call(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::trace!(path = %self.path.display(), "Opened store connection");
        Ok(SqliteRepository::new(conn))
    }
}
