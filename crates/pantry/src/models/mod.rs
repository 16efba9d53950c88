mod item;
mod search;

pub use item::{AddItem, DeleteItem, RemoveItem, UpdateQuantity};
pub use search::Search;
