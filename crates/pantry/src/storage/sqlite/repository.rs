//! SQLite repository implementation.
//!
//! Implements `EntryRepository` from `pantry_core::storage` on top of a single
//! `tokio_rusqlite` connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use pantry_core::inventory::{Entry, NewEntry, ENTITY};
use pantry_core::storage::{EntryRepository, RepositoryError, Result};

use super::conversions::{format_date, row_to_entry};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
pub(super) fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Repository bound to one open connection.
///
/// The connection lives exactly as long as this value. Dropping it stops the
/// background thread and closes the SQLite handle.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub(super) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create the schema if it does not exist yet.
    pub(super) async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Round-trip a trivial statement to prove the store answers.
    pub async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Store", ""))
    }
}

impl Drop for SqliteRepository {
    fn drop(&mut self) {
        tracing::trace!("Releasing store connection");
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_entry).map_err(wrap_err)?;

                let mut entries = Vec::new();
                for row_result in rows {
                    entries.push(row_result.map_err(wrap_err)?);
                }
                Ok(entries)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, ""))
    }

    async fn create_entry(&self, entry: &NewEntry) -> Result<i64> {
        let name = entry.name.clone();
        let quantity = entry.quantity.clone();
        let expiration_date = entry.expiration_date.as_ref().map(format_date);
        let entry_name = entry.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ENTRY,
                    rusqlite::params![name, quantity, expiration_date],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, entry_name))
    }

    async fn find_entry_id_by_name(&self, name: &str) -> Result<Option<i64>> {
        let name = name.to_string();
        let entry_name = name.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ENTRY_ID_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name], |row| row.get::<_, i64>("id")) {
                    Ok(id) => Ok(Some(id)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, entry_name))
    }

    async fn delete_entry(&self, id: i64) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_ENTRY, [id]).map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn update_quantity(&self, id: i64, quantity: &str) -> Result<u64> {
        let quantity = quantity.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ENTRY_QUANTITY,
                        rusqlite::params![id, quantity],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }
}
