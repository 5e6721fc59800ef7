//! Facet filtering.
//!
//! Pure functions of `(products, selection)`: no state, no host calls. The
//! empty-result notification is the controller's job.

use rust_decimal::Decimal;
use vitrine_core::{FilterSelection, PriceRange, Product, round_to_cents};

/// Products matching every constrained facet, in their original order.
///
/// - color must be one of the selected colors
/// - at least one size must be among the selected sizes
/// - price must fall in at least one selected `"min-max"` range
///
/// A facet with nothing selected matches every product. Price tokens that
/// do not parse are logged and match nothing. Prices are compared as shown
/// on the card, rounded to cents.
#[must_use]
pub fn filter_products(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    if selection.is_empty() {
        return products.to_vec();
    }

    let ranges = parse_ranges(selection);

    products
        .iter()
        .filter(|product| matches_selection(product, selection, &ranges))
        .cloned()
        .collect()
}

fn parse_ranges(selection: &FilterSelection) -> Vec<PriceRange> {
    selection
        .prices
        .iter()
        .filter_map(|token| match PriceRange::parse(token) {
            Ok(range) => Some(range),
            Err(e) => {
                tracing::warn!(token = %token, error = %e, "Ignoring malformed price range");
                None
            }
        })
        .collect()
}

fn matches_selection(product: &Product, selection: &FilterSelection, ranges: &[PriceRange]) -> bool {
    let color_ok = selection.colors.is_empty() || selection.colors.contains(&product.color);
    let size_ok = selection.sizes.is_empty()
        || product.sizes.iter().any(|size| selection.sizes.contains(size));
    let price_ok = selection.prices.is_empty()
        || in_any_range(round_to_cents(product.price), ranges);

    color_ok && size_ok && price_ok
}

fn in_any_range(price: Decimal, ranges: &[PriceRange]) -> bool {
    ranges.iter().any(|range| range.contains(price))
}
