//! Catalog loader.
//!
//! # Architecture
//!
//! - One GET against the configured products URL, no query parameters
//! - No retries, no backoff; the HTTP client only bounds the connect phase
//! - [`CatalogClient::fetch_products`] never fails: transport, status and
//!   parse errors are logged and turn into an empty catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_storefront::loader::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let products = client.fetch_products().await;
//! ```

mod client;

pub use client::CatalogClient;

use thiserror::Error;

/// Maximum number of response body characters kept for diagnostics.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// HTTP request failed (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// Body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// First characters of a response body, for logs and errors.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
