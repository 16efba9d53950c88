//! Item operations over an [`EntryRepository`].
//!
//! Handlers pass the repository for the current request in explicitly; these
//! functions never reach for shared state.

use crate::storage::{EntryRepository, RepositoryError};

use super::validation::parse_optional_expiration_date;
use super::{Entry, InventoryError, NewEntry};

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Item";

/// Validates the expiration date and inserts a new entry. Returns the new id.
pub async fn add_item(
    repo: &dyn EntryRepository,
    name: &str,
    quantity: &str,
    expiration_date: Option<&str>,
) -> Result<i64, InventoryError> {
    let expiration_date = parse_optional_expiration_date(expiration_date)?;
    let entry = NewEntry {
        name: name.to_string(),
        quantity: quantity.to_string(),
        expiration_date,
    };

    create_item(repo, &entry).await
}

/// Inserts an already validated entry. Returns the new id.
pub async fn create_item(repo: &dyn EntryRepository, entry: &NewEntry) -> Result<i64, InventoryError> {
    let id = repo.create_entry(entry).await?;
    tracing::info!(id, name = %entry.name, "Added item");
    Ok(id)
}

/// Returns every entry in the store.
pub async fn list_items(repo: &dyn EntryRepository) -> Result<Vec<Entry>, InventoryError> {
    Ok(repo.list_entries().await?)
}

/// Deletes the entry matching `name`.
///
/// When several entries share the name, the one with the lowest id goes.
pub async fn remove_item_by_name(
    repo: &dyn EntryRepository,
    name: &str,
) -> Result<i64, InventoryError> {
    let id = repo
        .find_entry_id_by_name(name)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: ENTITY,
            id: name.to_string(),
        })?;

    repo.delete_entry(id).await?;
    tracing::info!(id, %name, "Removed item by name");
    Ok(id)
}

/// Deletes the entry with `id`. Missing ids are not an error.
pub async fn delete_item(repo: &dyn EntryRepository, id: i64) -> Result<u64, InventoryError> {
    let affected = repo.delete_entry(id).await?;
    tracing::info!(id, affected, "Deleted item");
    Ok(affected)
}

/// Sets the quantity of the entry with `id`. Missing ids are not an error.
pub async fn update_quantity(
    repo: &dyn EntryRepository,
    id: i64,
    quantity: &str,
) -> Result<u64, InventoryError> {
    let affected = repo.update_quantity(id, quantity).await?;
    tracing::info!(id, affected, %quantity, "Updated item quantity");
    Ok(affected)
}
