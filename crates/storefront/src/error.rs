//! Unified error handling with Sentry integration.
//!
//! The catalog view-model never returns errors to its host: failures are
//! logged and swallowed where they happen. `AppError` covers the binary's
//! startup path (configuration, HTTP client construction, page rendering),
//! where a failure ends the process.

use thiserror::Error;

use crate::config::ConfigError;
use crate::loader::LoaderError;
use crate::render::RenderError;

/// Application-level error type for the storefront binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog loader could not be built.
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    /// Page rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Writing the rendered page failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Log the error and capture it to Sentry.
    pub fn report(&self) {
        let event_id = sentry::capture_error(self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Storefront error"
        );
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Bought product", Some(&[("product_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
