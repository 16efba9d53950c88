use async_trait::async_trait;

use crate::inventory::{Entry, NewEntry};

use super::Result;

/// Repository for the `entries` table.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists every entry, ordered by id.
    async fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Inserts an entry and returns the id the store assigned to it.
    async fn create_entry(&self, entry: &NewEntry) -> Result<i64>;

    /// Finds the id of the lowest-id entry with the given name.
    async fn find_entry_id_by_name(&self, name: &str) -> Result<Option<i64>>;

    /// Deletes an entry by id and returns the number of rows removed.
    async fn delete_entry(&self, id: i64) -> Result<u64>;

    /// Sets the quantity of an entry and returns the number of rows changed.
    async fn update_quantity(&self, id: i64, quantity: &str) -> Result<u64>;
}
