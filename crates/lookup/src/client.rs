//! HTTP client for the Open Food Facts product API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Public Open Food Facts endpoint.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.net";

/// The subset of a product record the pantry cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub barcode: String,
    /// Product name, when the database has one.
    pub name: Option<String>,
}

/// Looks up products by barcode.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup(&self, barcode: &str) -> Result<ProductInfo>;
}

/// Response envelope of `GET /api/v2/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    #[serde(default)]
    status: serde_json::Value,
    #[serde(default)]
    product: Option<ProductBody>,
}

#[derive(Debug, Deserialize)]
struct ProductBody {
    #[serde(default)]
    product_name: Option<String>,
}

impl ProductEnvelope {
    fn found(&self) -> bool {
        self.status.as_i64() == Some(1)
    }
}

/// HTTP client for the barcode database.
#[derive(Debug, Clone)]
pub struct BarcodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl BarcodeClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (PANTRY_API_BASE_URL or the public endpoint).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PANTRY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the product URL for a barcode.
    fn url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v2/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        )
    }

    /// Fetch a product by barcode.
    pub async fn get_product(&self, barcode: &str) -> Result<ProductInfo> {
        let url = self.url(barcode);
        tracing::debug!(%url, "Looking up barcode");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%barcode, status = status.as_u16(), "Lookup service error");
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: ProductEnvelope = serde_json::from_str(&body)
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        if !envelope.found() {
            return Err(LookupError::NotFound);
        }

        Ok(ProductInfo {
            barcode: barcode.to_string(),
            name: envelope.product.and_then(|p| p.product_name),
        })
    }
}

#[async_trait]
impl ProductLookup for BarcodeClient {
    async fn lookup(&self, barcode: &str) -> Result<ProductInfo> {
        self.get_product(barcode).await
    }
}
