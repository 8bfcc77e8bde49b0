//! Catalog fetch from the product service.

use async_trait::async_trait;
use storefront_catalog::Product;

use crate::config::StorefrontConfig;

/// Anything that can supply the full catalog once at startup.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Failure to obtain the catalog. This is the only runtime error the page
/// surfaces to the shopper.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fetches the catalog with a single GET against the configured endpoint.
///
/// No query parameters are sent; filtering happens client-side.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.api_url.clone())
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(CatalogError::Status(status.as_u16(), reason.to_string()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(url = %self.url, products = products.len(), "catalog fetched");
        Ok(products)
    }
}

/// A fixed catalog, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
