//! Sort orders offered by the sort modal.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// How the catalog orders its products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Endpoint order, untouched.
    #[default]
    Listing,
    /// Newest listing date first; records without a parsable date go last.
    Recent,
    LowestPrice,
    HighestPrice,
}

impl SortOrder {
    /// Options shown in the sort modal, in display order.
    pub const OPTIONS: [Self; 3] = [Self::Recent, Self::LowestPrice, Self::HighestPrice];

    /// Stable token for hosts, matching the serde representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Recent => "recent",
            Self::LowestPrice => "lowest_price",
            Self::HighestPrice => "highest_price",
        }
    }

    /// Label shown in the sort modal.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Listing => "Relevância",
            Self::Recent => "Mais recentes",
            Self::LowestPrice => "Menor preço",
            Self::HighestPrice => "Maior preço",
        }
    }

    /// Sort `products` in place. Stable: ties keep their relative order.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            Self::Listing => {}
            Self::Recent => products.sort_by_key(|p| Reverse(p.listed_on())),
            Self::LowestPrice => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::HighestPrice => products.sort_by(|a, b| b.price.cmp(&a.price)),
        }
    }
}
