//! pantry_lookup - barcode lookup client for the Open Food Facts API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::{BarcodeClient, ProductInfo, ProductLookup, DEFAULT_BASE_URL};
pub use error::{LookupError, Result};
