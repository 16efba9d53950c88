//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::client::ProductInfo;

/// Format a product for output.
pub fn format_product(product: &ProductInfo, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(product),
        OutputFormat::Pretty => pretty::format_product(product),
    }
}
