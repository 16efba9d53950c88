//! pantry_core - domain types, validation and storage contracts for pantry.
//!
//! This crate holds no I/O. The server crate provides the SQLite-backed
//! implementation of [`storage::EntryRepository`].

pub mod inventory;
pub mod serde;
pub mod storage;
