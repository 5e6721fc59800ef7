//! Command dispatch and page state.

use vitrine_core::{Facet, FilterSelection, Product, SortOrder};

use super::Command;
use super::cart::{BuyControl, Cart};
use super::display::{DedupKey, DisplayEngine, page_size_for_width};
use super::filter::filter_products;
use super::host::{CatalogHost, Modal};
use super::panel::FacetPanel;
use crate::error::add_breadcrumb;

/// Alert shown when the checked facets match no product.
pub const NO_MATCHES_MESSAGE: &str = "Nenhum produto encontrado com os filtros selecionados.";

/// State of one catalog page.
#[derive(Debug, Clone)]
pub struct CatalogController {
    products: Vec<Product>,
    active: Vec<Product>,
    display: DisplayEngine,
    viewport_width: u32,
    /// Checkboxes as currently ticked.
    selection: FilterSelection,
    /// Selection behind the active list.
    applied: FilterSelection,
    sort: SortOrder,
    panel: FacetPanel,
    cart: Cart,
}

impl CatalogController {
    /// Create an empty page laid out for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn new(viewport_width: u32, dedup: DedupKey) -> Self {
        Self {
            products: Vec::new(),
            active: Vec::new(),
            display: DisplayEngine::new(page_size_for_width(viewport_width), dedup),
            viewport_width,
            selection: FilterSelection::new(),
            applied: FilterSelection::new(),
            sort: SortOrder::default(),
            panel: FacetPanel::new(),
            cart: Cart::new(),
        }
    }

    /// Apply `command` and push the resulting state to `host`.
    pub fn dispatch(&mut self, command: Command, host: &mut impl CatalogHost) {
        match command {
            Command::Load(products) => self.load(products, host),
            Command::Resize { width } => self.resize(width, host),
            Command::LoadMore => self.load_more(host),
            Command::OpenModal(modal) => self.set_modal(modal, true, host),
            Command::CloseModal(modal) => self.set_modal(modal, false, host),
            Command::ToggleFacetGroup(facet) => {
                let expanded = self.panel.toggle_group(facet);
                host.set_facet_group_expanded(facet, expanded);
                host.set_action_bar_visible(self.panel.action_bar_visible());
            }
            Command::ToggleFacetValue { facet, value } => {
                let checked = self.selection.toggle(facet, &value);
                host.set_facet_checked(facet, &value, checked);
            }
            Command::ApplyFilters => self.apply_filters(host),
            Command::ClearFilters => self.clear_filters(host),
            Command::Sort(order) => {
                tracing::debug!(?order, "Sorting catalog");
                self.sort = order;
                self.refresh(host);
            }
            Command::Buy(control) => self.buy(&control, host),
        }
    }

    fn load(&mut self, products: Vec<Product>, host: &mut impl CatalogHost) {
        tracing::info!(count = products.len(), "Catalog loaded");
        let count = products.len().to_string();
        add_breadcrumb("catalog", "Loaded products", Some(&[("count", count.as_str())]));
        self.products = products;
        self.refresh(host);
    }

    fn resize(&mut self, width: u32, host: &mut impl CatalogHost) {
        self.viewport_width = width;
        self.display.set_page_size(page_size_for_width(width));
        self.render(host);
    }

    fn load_more(&mut self, host: &mut impl CatalogHost) {
        let added = self.display.load_more(&self.active);
        tracing::debug!(added, shown = self.display.cards().len(), "Loaded more cards");
        host.render_cards(self.display.cards());
        host.set_load_more_visible(self.display.has_more());
    }

    fn set_modal(&mut self, modal: Modal, open: bool, host: &mut impl CatalogHost) {
        self.panel.set_open(modal, open);
        host.set_modal_visible(modal, open);
    }

    fn apply_filters(&mut self, host: &mut impl CatalogHost) {
        let matches = filter_products(&self.products, &self.selection);

        if matches.is_empty() && !self.products.is_empty() {
            tracing::info!(selection = ?self.selection, "No products match the selected filters");
            host.alert(NO_MATCHES_MESSAGE);
            self.applied.clear();
        } else {
            let count = matches.len().to_string();
            add_breadcrumb("catalog", "Applied filters", Some(&[("matches", count.as_str())]));
            self.applied = self.selection.clone();
        }

        self.refresh(host);
    }

    fn clear_filters(&mut self, host: &mut impl CatalogHost) {
        for facet in Facet::ALL {
            for value in self.selection.values(facet) {
                host.set_facet_checked(facet, value, false);
            }
        }
        self.selection.clear();
        self.applied.clear();
        self.refresh(host);
    }

    fn buy(&mut self, control: &BuyControl, host: &mut impl CatalogHost) {
        add_breadcrumb("cart", "Bought product", Some(&[("product_id", control.id.as_str())]));
        self.cart.push(control.to_product());
        host.set_cart_count(self.cart.len());
    }

    /// Rebuild the active list from the applied selection and sort order,
    /// then render it from the first page.
    fn refresh(&mut self, host: &mut impl CatalogHost) {
        let mut active = filter_products(&self.products, &self.applied);
        self.sort.apply(&mut active);
        self.active = active;
        self.render(host);
    }

    fn render(&mut self, host: &mut impl CatalogHost) {
        self.display.render(&self.active);
        host.render_cards(self.display.cards());
        host.set_load_more_visible(self.display.has_more());
    }

    /// Products as loaded, in endpoint order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products the cards are drawn from: filtered and sorted.
    #[must_use]
    pub fn active(&self) -> &[Product] {
        &self.active
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayEngine {
        &self.display
    }

    #[must_use]
    pub const fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub const fn applied(&self) -> &FilterSelection {
        &self.applied
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort
    }

    #[must_use]
    pub const fn panel(&self) -> &FacetPanel {
        &self.panel
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }
}
