//! Pretty output formatting.

use crate::client::ProductInfo;

/// Format a product for display.
pub fn format_product(product: &ProductInfo) -> String {
    let name = product.name.as_deref().unwrap_or("(no name on record)");
    format!("{}\n  Barcode: {}", name, product.barcode)
}
