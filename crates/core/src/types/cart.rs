//! Cart entries.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A product snapshot taken when the shopper pressed "buy".
///
/// Entries are never merged: buying the same product twice yields two
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartEntry {
    pub product: Product,
}

impl CartEntry {
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self { product }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }
}

impl From<Product> for CartEntry {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}
