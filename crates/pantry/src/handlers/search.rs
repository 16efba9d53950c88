use askama::Template;
use axum::{extract::State, response::IntoResponse};

use pantry_lookup::ProductInfo;

use super::form::ValidForm;
use super::pages::HtmlTemplate;
use crate::models::Search;
use crate::state::AppState;

/// Barcode search result. Shows either the product or why it was not found.
#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate {
    barcode: String,
    found: bool,
    product_name: String,
    error: String,
}

impl SearchTemplate {
    fn found(product: ProductInfo) -> Self {
        Self {
            product_name: product.name.unwrap_or_else(|| "Unnamed product".to_string()),
            barcode: product.barcode,
            found: true,
            error: String::new(),
        }
    }

    fn failed(barcode: String, error: impl ToString) -> Self {
        Self {
            barcode,
            found: false,
            product_name: String::new(),
            error: error.to_string(),
        }
    }
}

/// Look up a product by barcode (POST /search).
///
/// Lookup failures are shown on the page rather than returned as errors.
pub async fn search(
    State(state): State<AppState>,
    ValidForm(search): ValidForm<Search>,
) -> impl IntoResponse {
    let template = match state.lookup.lookup(&search.barcode).await {
        Ok(product) => {
            tracing::info!(barcode = %product.barcode, "Product found");
            SearchTemplate::found(product)
        }
        Err(err) => {
            tracing::warn!(barcode = %search.barcode, error = %err, "Product lookup failed");
            SearchTemplate::failed(search.barcode, err)
        }
    };

    HtmlTemplate(template)
}
