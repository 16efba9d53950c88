//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `pantry_core::storage`.

pub mod sqlite;

pub use sqlite::{SqliteRepository, SqliteStore};
