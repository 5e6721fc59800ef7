//! Checkbox options offered by the filter modal.

use vitrine_core::{Facet, PriceRange, Product, format_decimal_br};

/// Price bands offered when the host does not supply its own.
///
/// Bounds are inclusive and prices are compared rounded to cents, so the
/// bands end one cent below the next one starts: every price falls in
/// exactly one band.
pub const DEFAULT_PRICE_RANGES: [&str; 5] =
    ["0-49.99", "50-149.99", "150-299.99", "300-499.99", "500-"];

/// A single checkbox: the token it contributes and the text beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

/// Options per facet, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub colors: Vec<FacetOption>,
    pub sizes: Vec<FacetOption>,
    pub prices: Vec<FacetOption>,
}

impl FacetOptions {
    /// Colors and sizes found in `products` (first occurrence order) plus
    /// the default price bands.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut colors: Vec<&str> = Vec::new();
        let mut sizes: Vec<&str> = Vec::new();

        for product in products {
            let color = product.color.as_str();
            if !color.is_empty() && !colors.contains(&color) {
                colors.push(color);
            }
            for size in &product.sizes {
                if !sizes.contains(&size.as_str()) {
                    sizes.push(size.as_str());
                }
            }
        }

        Self {
            colors: colors.into_iter().map(plain_option).collect(),
            sizes: sizes.into_iter().map(plain_option).collect(),
            prices: DEFAULT_PRICE_RANGES.into_iter().map(price_option).collect(),
        }
    }

    #[must_use]
    pub fn for_facet(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::Color => &self.colors,
            Facet::Size => &self.sizes,
            Facet::Price => &self.prices,
        }
    }
}

fn plain_option(value: &str) -> FacetOption {
    FacetOption {
        value: value.to_owned(),
        label: value.to_owned(),
    }
}

fn price_option(token: &str) -> FacetOption {
    let label = match PriceRange::parse(token) {
        Ok(PriceRange { min, max: Some(max) }) => format!(
            "de R${} até R${}",
            format_decimal_br(min),
            format_decimal_br(max)
        ),
        Ok(PriceRange { min, max: None }) => format!("a partir de R${}", format_decimal_br(min)),
        Err(_) => token.to_owned(),
    };
    FacetOption {
        value: token.to_owned(),
        label,
    }
}
