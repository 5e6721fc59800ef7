//! Vitrine Storefront - static catalog page.
//!
//! This binary fetches the catalog once, runs it through the catalog
//! view-model and writes the first page of the catalog as HTML to stdout.
//!
//! # Architecture
//!
//! - `reqwest` for the single catalog fetch
//! - The catalog view-model for dedup, pagination, filtering and the cart
//! - Askama templates for the page markup
//!
//! A fetch failure is not fatal: the page is rendered with no products.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::process::ExitCode;

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_storefront::catalog::{CatalogController, Command, FacetOptions};
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::error::Result;
use vitrine_storefront::loader::CatalogClient;
use vitrine_storefront::render::HtmlHost;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    // Load configuration from environment (needed for Sentry init)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet; stderr is the only channel left.
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration.
    // Logs go to stderr so stdout carries only the page.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::FAILURE
        }
    }
}

/// Fetch, lay out and print the catalog page.
async fn run(config: &StorefrontConfig) -> Result<()> {
    let client = CatalogClient::new(&config.catalog)?;
    tracing::info!(url = %client.products_url(), "Fetching catalog");
    let products = client.fetch_products().await;

    let mut host = HtmlHost::new(FacetOptions::from_products(&products));
    let mut controller = CatalogController::new(config.viewport_width, config.dedup_key);
    controller.dispatch(Command::Load(products), &mut host);

    let html = host.render()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;

    tracing::info!(
        cards = host.cards().len(),
        load_more = host.load_more_visible(),
        "Catalog page rendered"
    );
    Ok(())
}
