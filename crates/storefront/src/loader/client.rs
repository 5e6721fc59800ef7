//! HTTP client for the catalog endpoint.

use std::time::Duration;

use tracing::instrument;
use url::Url;
use vitrine_core::Product;

use super::{LoaderError, excerpt};
use crate::config::CatalogConfig;

/// Client for the catalog endpoint.
///
/// Cheap to keep around for the lifetime of a page; it holds a
/// `reqwest::Client` connection pool and the products URL.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    products_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &CatalogConfig) -> Result<Self, LoaderError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            products_url: config.products_url.clone(),
        })
    }

    /// The URL products are fetched from.
    #[must_use]
    pub const fn products_url(&self) -> &Url {
        &self.products_url
    }

    /// Fetch the product list, surfacing every failure as a [`LoaderError`].
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::Http` on transport failure, `LoaderError::Status`
    /// on a non-2xx answer and `LoaderError::Parse` if the body is not a JSON
    /// array of products.
    #[instrument(skip(self), fields(url = %self.products_url))]
    pub async fn try_fetch_products(&self) -> Result<Vec<Product>, LoaderError> {
        let response = self
            .client
            .get(self.products_url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %excerpt(&body),
                "Catalog endpoint returned non-success status"
            );
            return Err(LoaderError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %excerpt(&body),
                "Failed to parse catalog response"
            );
            LoaderError::Parse(e)
        })?;

        tracing::debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }

    /// Fetch the product list, yielding an empty list on any failure.
    ///
    /// Failures are logged; nothing is retried.
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch products");
                Vec::new()
            }
        }
    }
}
