//! Card pagination with "load more".
//!
//! The engine walks the active product list in order and reveals one page of
//! cards at a time, skipping any product whose key was already shown. The
//! page size follows the viewport: narrow screens get smaller pages.

use std::collections::HashSet;
use std::str::FromStr;

use vitrine_core::Product;

use super::host::ProductCard;

/// Widest viewport (in CSS pixels) that still gets the narrow page size.
pub const NARROW_VIEWPORT_MAX_WIDTH: u32 = 1024;
/// Cards per page up to [`NARROW_VIEWPORT_MAX_WIDTH`].
pub const NARROW_PAGE_SIZE: usize = 4;
/// Cards per page on wider viewports.
pub const WIDE_PAGE_SIZE: usize = 6;

/// Cards per page for a viewport `width` pixels wide.
#[must_use]
pub const fn page_size_for_width(width: u32) -> usize {
    if width <= NARROW_VIEWPORT_MAX_WIDTH {
        NARROW_PAGE_SIZE
    } else {
        WIDE_PAGE_SIZE
    }
}

/// Which product field decides that two records are the same card.
///
/// The catalog endpoint repeats a product once per variant under the same
/// name, so `Name` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupKey {
    #[default]
    Name,
    Id,
}

impl DedupKey {
    #[must_use]
    pub fn key<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            Self::Name => &product.name,
            Self::Id => product.id.as_str(),
        }
    }
}

impl FromStr for DedupKey {
    type Err = UnknownDedupKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "id" => Ok(Self::Id),
            _ => Err(UnknownDedupKey(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown [`DedupKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dedup key {0:?} (expected \"name\" or \"id\")")]
pub struct UnknownDedupKey(String);

/// Paginated, deduplicated card list.
#[derive(Debug, Clone)]
pub struct DisplayEngine {
    page_size: usize,
    dedup: DedupKey,
    shown: HashSet<String>,
    cards: Vec<ProductCard>,
    has_more: bool,
}

impl DisplayEngine {
    #[must_use]
    pub fn new(page_size: usize, dedup: DedupKey) -> Self {
        Self {
            page_size,
            dedup,
            shown: HashSet::new(),
            cards: Vec::new(),
            has_more: false,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub const fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    /// Cards rendered so far, in display order.
    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Whether the "load more" control should be visible.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Forget everything shown and render the first page of `products`.
    pub fn render(&mut self, products: &[Product]) {
        self.shown.clear();
        self.cards.clear();
        self.reveal(products);
    }

    /// Append the next page of not-yet-shown products.
    ///
    /// Returns the number of cards added.
    pub fn load_more(&mut self, products: &[Product]) -> usize {
        self.reveal(products)
    }

    fn reveal(&mut self, products: &[Product]) -> usize {
        let mut added = 0;
        self.has_more = false;

        for product in products {
            let key = self.dedup.key(product);
            if self.shown.contains(key) {
                continue;
            }
            if added == self.page_size {
                self.has_more = true;
                break;
            }
            self.shown.insert(key.to_owned());
            self.cards.push(ProductCard::from(product));
            added += 1;
        }

        added
    }
}

/// Number of distinct keys in `products`.
#[must_use]
pub fn distinct_count(products: &[Product], dedup: DedupKey) -> usize {
    products
        .iter()
        .map(|p| dedup.key(p))
        .collect::<HashSet<_>>()
        .len()
}
