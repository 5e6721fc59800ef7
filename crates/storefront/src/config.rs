//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `VITRINE_PRODUCTS_URL` - Catalog endpoint (default: `http://localhost:5000/products`)
//! - `VITRINE_VIEWPORT_WIDTH` - Viewport width in CSS pixels used to size pages (default: 1280)
//! - `VITRINE_CONNECT_TIMEOUT_SECS` - TCP connect timeout for the catalog fetch (default: 10)
//! - `VITRINE_DEDUP_KEY` - Field that identifies a card, `name` or `id` (default: `name`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::catalog::DedupKey;

/// Default catalog endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "http://localhost:5000/products";
const DEFAULT_VIEWPORT_WIDTH: &str = "1280";
const DEFAULT_CONNECT_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog endpoint configuration
    pub catalog: CatalogConfig,
    /// Viewport width the initial page is laid out for
    pub viewport_width: u32,
    /// Which product field collapses duplicate cards
    pub dedup_key: DedupKey,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g., "production")
    pub sentry_environment: Option<String>,
}

/// Catalog endpoint configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL returning the JSON product array
    pub products_url: Url,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let products_url = get_or_default(&lookup, "VITRINE_PRODUCTS_URL", DEFAULT_PRODUCTS_URL);
        let products_url = Url::parse(&products_url).map_err(|e| {
            ConfigError::InvalidEnvVar("VITRINE_PRODUCTS_URL".to_string(), e.to_string())
        })?;

        let connect_timeout_secs = parse_var(
            &lookup,
            "VITRINE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;
        let viewport_width = parse_var(&lookup, "VITRINE_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH)?;
        let dedup_key = parse_var(&lookup, "VITRINE_DEDUP_KEY", "name")?;

        Ok(Self {
            catalog: CatalogConfig {
                products_url,
                connect_timeout_secs,
            },
            viewport_width,
            dedup_key,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Get a variable (or its default) and parse it.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
