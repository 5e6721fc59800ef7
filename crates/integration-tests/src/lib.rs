//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_properties` - Pagination, filtering and cart properties driven
//!   through `CatalogController` and `HtmlHost`
//! - `page_flow` - Catalog fetched from a `wiremock` endpoint and rendered
//!
//! This library holds the product fixtures shared by the test files.

use rust_decimal::Decimal;
use serde_json::{Value, json};
use vitrine_core::{Product, ProductId};

/// A product with the fields the filter looks at.
#[must_use]
pub fn product(name: &str, color: &str, price: i64, sizes: &[&str]) -> Product {
    let mut product = Product::snapshot(ProductId::new(name), name, Decimal::new(price, 0));
    product.color = color.to_string();
    product.sizes = sizes.iter().map(ToString::to_string).collect();
    product
}

/// `count` products with distinct names `P0..P{count-1}`.
#[must_use]
pub fn distinct_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| product(&format!("P{i}"), "Preto", 100, &["M"]))
        .collect()
}

/// The two-product catalog used across the filter examples.
#[must_use]
pub fn red_and_blue() -> Vec<Product> {
    vec![
        product("A", "red", 50, &["M"]),
        product("B", "blue", 150, &["L"]),
    ]
}

/// Catalog endpoint body: a JSON array in the wire format.
#[must_use]
pub fn catalog_json() -> Value {
    json!([
        {"id": "1", "name": "CAMISETA MESCLA", "price": 28.0, "parcelamento": [3, 9.33],
         "color": "Cinza", "image": "img/img_2.png", "size": ["P", "M"], "date": "2023-05-01"},
        {"id": "2", "name": "CAMISETA MESCLA", "price": 28.0, "parcelamento": [3, 9.33],
         "color": "Cinza", "image": "img/img_2.png", "size": ["G"], "date": "2023-05-01"},
        {"id": "3", "name": "SAIA EM COURO", "price": 398.0, "parcelamento": [5, 79.6],
         "color": "Preto", "image": "img/img_3.png", "size": ["36", "38"], "date": "2023-06-12"},
        {"id": "4", "name": "VESTIDO ESTAMPADO", "price": 120.0, "parcelamento": [3, 40.0],
         "color": "Rosa", "image": "img/img_4.png", "size": ["P"], "date": "2023-04-20"},
        {"id": 5, "name": "BLUSA LISTRADA", "price": 89.9, "parcelamento": [2, 44.95],
         "color": "Branco", "image": "img/img_5.png", "size": ["M", "G"], "date": "2023-07-02"}
    ])
}
