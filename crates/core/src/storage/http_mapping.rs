//! Pure functions for mapping storage and inventory errors to HTTP status codes.

use crate::inventory::InventoryError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use pantry_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Item",
///     id: "Milk".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps an [`InventoryError`] to an HTTP status code.
///
/// Validation failures are always 400; repository failures defer to
/// [`repository_error_to_status_code`].
pub fn inventory_error_to_status_code(error: &InventoryError) -> u16 {
    match error {
        InventoryError::Validation(_) => 400,
        InventoryError::Repository(err) => repository_error_to_status_code(err),
    }
}
