//! Catalog view-model.
//!
//! # Architecture
//!
//! - [`CatalogController`] owns every piece of page state: the loaded
//!   products, the active (filtered, sorted) list, the card pagination, the
//!   facet selection, modal state and the cart
//! - Hosts translate widget events into [`Command`]s and implement
//!   [`CatalogHost`] to receive the resulting state
//! - Everything runs synchronously on the caller's thread; the only async
//!   step, fetching the catalog, happens before `Command::Load`
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_storefront::catalog::{CatalogController, Command, DedupKey};
//!
//! let mut controller = CatalogController::new(1280, DedupKey::Name);
//! controller.dispatch(Command::Load(products), &mut host);
//! controller.dispatch(Command::LoadMore, &mut host);
//! ```

mod cart;
mod controller;
mod display;
mod filter;
mod host;
mod options;
mod panel;

pub use cart::{BuyControl, Cart};
pub use controller::{CatalogController, NO_MATCHES_MESSAGE};
pub use display::{
    DedupKey, DisplayEngine, NARROW_PAGE_SIZE, NARROW_VIEWPORT_MAX_WIDTH, UnknownDedupKey,
    WIDE_PAGE_SIZE, distinct_count, page_size_for_width,
};
pub use filter::filter_products;
pub use host::{CatalogHost, Modal, ProductCard};
pub use options::{DEFAULT_PRICE_RANGES, FacetOption, FacetOptions};
pub use panel::FacetPanel;

use vitrine_core::{Facet, Product, SortOrder};

/// A user or host event the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The catalog finished loading (possibly empty).
    Load(Vec<Product>),
    /// The viewport changed width; the list is rendered again from scratch.
    Resize { width: u32 },
    /// The "load more" control was clicked.
    LoadMore,
    OpenModal(Modal),
    CloseModal(Modal),
    /// A facet group's arrow was clicked.
    ToggleFacetGroup(Facet),
    /// A facet checkbox changed. Only updates the pending selection.
    ToggleFacetValue { facet: Facet, value: String },
    /// "Aplicar" in the filter modal's action bar.
    ApplyFilters,
    /// "Limpar" in the filter modal's action bar.
    ClearFilters,
    /// An option in the sort modal was picked.
    Sort(SortOrder),
    /// A buy control was clicked.
    Buy(BuyControl),
}
