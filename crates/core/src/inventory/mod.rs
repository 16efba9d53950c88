mod error;
mod operations;
mod types;
mod validation;

pub use error::{InventoryError, ValidationError};
pub use operations::{
    add_item, create_item, delete_item, list_items, remove_item_by_name, update_quantity, ENTITY,
};
pub use types::{Entry, NewEntry};
pub use validation::{
    parse_expiration_date, parse_item_id, parse_optional_expiration_date, require,
};

/// Storage and wire format for expiration dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
