//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run them
//! off the async runtime.

mod conversions;
mod error;
mod repository;
mod schema;
mod store;

pub use repository::SqliteRepository;
pub use store::SqliteStore;
