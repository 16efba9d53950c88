use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors raised while validating user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
    #[error("Malformed form data: {0}")]
    MalformedForm(String),
}

/// Errors returned by the item operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidDate("2024/01/01".to_string()).to_string(),
            "Invalid date format. Use YYYY-MM-DD"
        );
        assert_eq!(
            ValidationError::MissingField("name").to_string(),
            "Missing required field: name"
        );
        assert_eq!(
            ValidationError::InvalidField {
                field: "item_id",
                value: "abc".to_string()
            }
            .to_string(),
            "Invalid value for item_id: abc"
        );
    }

    #[test]
    fn test_inventory_error_is_transparent() {
        let err = InventoryError::from(RepositoryError::NotFound {
            entity_type: "Item",
            id: "Milk".to_string(),
        });
        assert_eq!(err.to_string(), "Item not found: Milk");
    }
}
