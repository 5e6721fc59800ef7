//! Catalog fetched over HTTP and rendered as a page.
//!
//! A `wiremock` server stands in for the catalog endpoint; configuration is
//! built through the same lookup the binary uses for environment variables.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use vitrine_core::SortOrder;
use vitrine_integration_tests::catalog_json;
use vitrine_storefront::catalog::{CatalogController, Command, FacetOptions};
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::loader::{CatalogClient, LoaderError};
use vitrine_storefront::render::HtmlHost;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, extra: &[(&str, &str)]) -> StorefrontConfig {
    let mut vars: HashMap<String, String> = extra
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    vars.insert(
        "VITRINE_PRODUCTS_URL".to_string(),
        format!("{}/products", server.uri()),
    );
    StorefrontConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .mount(&server)
        .await;
    server
}

async fn load_page(config: &StorefrontConfig) -> (CatalogController, HtmlHost) {
    let client = CatalogClient::new(&config.catalog).unwrap();
    let products = client.fetch_products().await;

    let mut host = HtmlHost::new(FacetOptions::from_products(&products));
    let mut controller = CatalogController::new(config.viewport_width, config.dedup_key);
    controller.dispatch(Command::Load(products), &mut host);
    (controller, host)
}

fn card_names(host: &HtmlHost) -> Vec<&str> {
    host.cards().iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn test_fetched_catalog_renders_distinct_names() {
    let server = catalog_server().await;
    let (controller, host) = load_page(&config_for(&server, &[])).await;

    assert_eq!(controller.products().len(), 5);
    assert_eq!(
        card_names(&host),
        [
            "CAMISETA MESCLA",
            "SAIA EM COURO",
            "VESTIDO ESTAMPADO",
            "BLUSA LISTRADA"
        ]
    );
    assert!(!host.load_more_visible());

    let html = host.render().unwrap();
    assert!(html.contains("R$ 89,90"));
    assert!(html.contains("até 3x de R$9,33"));
    assert!(html.contains("value=\"Cinza\""));
    assert!(html.contains("value=\"36\""));
}

#[tokio::test]
async fn test_dedup_by_id_when_configured() {
    let server = catalog_server().await;
    let config = config_for(&server, &[("VITRINE_DEDUP_KEY", "id")]);
    let (_, host) = load_page(&config).await;

    assert_eq!(host.cards().len(), 5);
    assert_eq!(host.cards()[4].id, "5");
}

#[tokio::test]
async fn test_narrow_viewport_pages_by_four() {
    let server = catalog_server().await;
    let config = config_for(
        &server,
        &[("VITRINE_VIEWPORT_WIDTH", "800"), ("VITRINE_DEDUP_KEY", "id")],
    );
    let (mut controller, mut host) = load_page(&config).await;

    assert_eq!(host.cards().len(), 4);
    assert!(host.load_more_visible());

    controller.dispatch(Command::LoadMore, &mut host);
    assert_eq!(host.cards().len(), 5);
    assert!(!host.load_more_visible());
}

#[tokio::test]
async fn test_sort_fetched_catalog() {
    let server = catalog_server().await;
    let (mut controller, mut host) = load_page(&config_for(&server, &[])).await;

    controller.dispatch(Command::Sort(SortOrder::Recent), &mut host);
    assert_eq!(
        card_names(&host),
        [
            "BLUSA LISTRADA",
            "SAIA EM COURO",
            "CAMISETA MESCLA",
            "VESTIDO ESTAMPADO"
        ]
    );

    controller.dispatch(Command::Sort(SortOrder::LowestPrice), &mut host);
    assert_eq!(
        card_names(&host),
        [
            "CAMISETA MESCLA",
            "BLUSA LISTRADA",
            "VESTIDO ESTAMPADO",
            "SAIA EM COURO"
        ]
    );
}

#[tokio::test]
async fn test_server_error_renders_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    let config = config_for(&server, &[]);

    let client = CatalogClient::new(&config.catalog).unwrap();
    let err = client.try_fetch_products().await.unwrap_err();
    assert!(matches!(err, LoaderError::Status { status: 503, .. }));

    let (controller, host) = load_page(&config).await;
    assert!(controller.products().is_empty());
    assert!(host.cards().is_empty());
    assert!(!host.load_more_visible());
}
