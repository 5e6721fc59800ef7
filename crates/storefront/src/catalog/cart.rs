//! In-memory cart.

use rust_decimal::Decimal;
use vitrine_core::{CartEntry, Product, ProductId};

/// Attributes carried by a buy control (`.botao-comprar`).
///
/// Hosts read them as strings straight from the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyControl {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl BuyControl {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    /// Rebuild a product snapshot from the control's attributes.
    ///
    /// An unparsable price is logged and replaced by zero.
    #[must_use]
    pub fn to_product(&self) -> Product {
        let price = self.price.trim().parse::<Decimal>().unwrap_or_else(|e| {
            tracing::warn!(
                product_id = %self.id,
                price = %self.price,
                error = %e,
                "Buy control carries an invalid price"
            );
            Decimal::ZERO
        });
        Product::snapshot(ProductId::new(self.id.clone()), self.name.clone(), price)
    }
}

/// Append-only list of bought products.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: Product) {
        self.entries.push(CartEntry::new(product));
    }

    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
