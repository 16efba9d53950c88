//! Lookup error types.

use thiserror::Error;

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors that can occur while looking up a barcode.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup service returned {status}")]
    Status { status: u16 },

    #[error("Product not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
