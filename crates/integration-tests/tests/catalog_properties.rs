//! Catalog view-model properties exercised end to end.
//!
//! Each test drives a `CatalogController` with `Command`s and checks the
//! state an `HtmlHost` ends up with, including the rendered page.

#![allow(clippy::unwrap_used)]

use vitrine_core::{Facet, FilterSelection, SortOrder};
use vitrine_integration_tests::{distinct_products, product, red_and_blue};
use vitrine_storefront::catalog::{
    BuyControl, CatalogController, Command, DedupKey, FacetOptions, NO_MATCHES_MESSAGE,
    filter_products,
};
use vitrine_storefront::render::HtmlHost;

fn loaded(products: Vec<vitrine_core::Product>, width: u32) -> (CatalogController, HtmlHost) {
    let mut host = HtmlHost::new(FacetOptions::from_products(&products));
    let mut controller = CatalogController::new(width, DedupKey::Name);
    controller.dispatch(Command::Load(products), &mut host);
    (controller, host)
}

fn card_names(host: &HtmlHost) -> Vec<&str> {
    host.cards().iter().map(|c| c.name.as_str()).collect()
}

fn select(controller: &mut CatalogController, host: &mut HtmlHost, facet: Facet, value: &str) {
    controller.dispatch(
        Command::ToggleFacetValue {
            facet,
            value: value.to_string(),
        },
        host,
    );
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_initial_render_is_capped_by_page_size() {
    for (count, width, expected) in [(3, 1280, 3), (10, 1280, 6), (10, 800, 4), (4, 800, 4)] {
        let (_, host) = loaded(distinct_products(count), width);
        assert_eq!(host.cards().len(), expected, "{count} products at {width}px");
    }
}

#[test]
fn test_load_more_until_exhausted() {
    let (mut controller, mut host) = loaded(distinct_products(10), 800);
    assert!(host.load_more_visible());

    controller.dispatch(Command::LoadMore, &mut host);
    assert_eq!(host.cards().len(), 8);
    assert!(host.load_more_visible());

    controller.dispatch(Command::LoadMore, &mut host);
    assert_eq!(host.cards().len(), 10);
    assert!(!host.load_more_visible());

    controller.dispatch(Command::LoadMore, &mut host);
    assert_eq!(host.cards().len(), 10);
}

#[test]
fn test_duplicate_names_render_once() {
    let mut products = distinct_products(3);
    products.push(product("P0", "Branco", 80, &["G"]));
    let (_, host) = loaded(products, 1280);
    assert_eq!(card_names(&host), ["P0", "P1", "P2"]);
    assert!(!host.load_more_visible());
}

#[test]
fn test_resize_restarts_from_first_page() {
    let (mut controller, mut host) = loaded(distinct_products(10), 1280);
    controller.dispatch(Command::LoadMore, &mut host);
    assert_eq!(host.cards().len(), 10);

    controller.dispatch(Command::Resize { width: 600 }, &mut host);
    assert_eq!(host.cards().len(), 4);
    assert!(host.load_more_visible());
}

#[test]
fn test_empty_catalog_renders_nothing() {
    let (_, host) = loaded(Vec::new(), 1280);
    assert!(host.cards().is_empty());
    assert!(!host.load_more_visible());
    assert!(host.render().unwrap().contains("id=\"lista-produtos\""));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_by_color() {
    let (mut controller, mut host) = loaded(red_and_blue(), 1280);
    select(&mut controller, &mut host, Facet::Color, "red");
    assert_eq!(card_names(&host), ["A", "B"], "checkbox alone does not filter");

    controller.dispatch(Command::ApplyFilters, &mut host);
    assert_eq!(card_names(&host), ["A"]);
    assert!(host.alerts().is_empty());
}

#[test]
fn test_filter_by_price_range() {
    let (mut controller, mut host) = loaded(red_and_blue(), 1280);
    select(&mut controller, &mut host, Facet::Price, "100-200");
    controller.dispatch(Command::ApplyFilters, &mut host);
    assert_eq!(card_names(&host), ["B"]);
}

#[test]
fn test_no_match_alerts_and_shows_everything() {
    let (mut controller, mut host) = loaded(red_and_blue(), 1280);
    select(&mut controller, &mut host, Facet::Color, "green");
    controller.dispatch(Command::ApplyFilters, &mut host);

    assert_eq!(host.alerts(), [NO_MATCHES_MESSAGE]);
    assert_eq!(card_names(&host), ["A", "B"]);
    assert!(controller.applied().is_empty());
    assert!(host.is_checked(Facet::Color, "green"));
}

#[test]
fn test_clear_filters_unchecks_and_restores() {
    let (mut controller, mut host) = loaded(red_and_blue(), 1280);
    select(&mut controller, &mut host, Facet::Color, "red");
    select(&mut controller, &mut host, Facet::Size, "M");
    controller.dispatch(Command::ApplyFilters, &mut host);
    assert_eq!(card_names(&host), ["A"]);

    controller.dispatch(Command::ClearFilters, &mut host);
    assert_eq!(card_names(&host), ["A", "B"]);
    assert!(!host.is_checked(Facet::Color, "red"));
    assert!(!host.is_checked(Facet::Size, "M"));
    assert!(controller.selection().is_empty());
}

#[test]
fn test_filter_is_idempotent_and_empty_selection_is_identity() {
    let products = red_and_blue();
    let selection = FilterSelection::new()
        .with(Facet::Color, "blue")
        .with(Facet::Price, "100-200");

    let once = filter_products(&products, &selection);
    let twice = filter_products(&once, &selection);
    assert_eq!(once, twice);

    assert_eq!(filter_products(&products, &FilterSelection::new()), products);
}

#[test]
fn test_filtered_view_survives_resize() {
    let mut products = distinct_products(8);
    products.push(product("Red", "red", 10, &["M"]));
    let (mut controller, mut host) = loaded(products, 1280);
    select(&mut controller, &mut host, Facet::Color, "red");
    controller.dispatch(Command::ApplyFilters, &mut host);

    controller.dispatch(Command::Resize { width: 500 }, &mut host);
    assert_eq!(card_names(&host), ["Red"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_applies_to_filtered_list() {
    let products = vec![
        product("A", "red", 300, &["M"]),
        product("B", "blue", 10, &["M"]),
        product("C", "red", 20, &["M"]),
    ];
    let (mut controller, mut host) = loaded(products, 1280);
    select(&mut controller, &mut host, Facet::Color, "red");
    controller.dispatch(Command::ApplyFilters, &mut host);

    controller.dispatch(Command::Sort(SortOrder::LowestPrice), &mut host);
    assert_eq!(card_names(&host), ["C", "A"]);

    controller.dispatch(Command::Sort(SortOrder::HighestPrice), &mut host);
    assert_eq!(card_names(&host), ["A", "C"]);
}

// ============================================================================
// Cart
// ============================================================================

#[test]
fn test_buy_appends_in_click_order() {
    let (mut controller, mut host) = loaded(red_and_blue(), 1280);
    controller.dispatch(Command::Buy(BuyControl::new("A", "A", "50")), &mut host);
    controller.dispatch(Command::Buy(BuyControl::new("B", "B", "150")), &mut host);

    let names: Vec<&str> = controller.cart().entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(host.cart_count(), 2);
    assert!(
        host.render()
            .unwrap()
            .contains("<span id=\"contador-carrinho\">2</span>")
    );
}
