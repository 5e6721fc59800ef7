//! The seam between the view-model and whatever draws it.
//!
//! A host owns the real widgets (DOM nodes, terminal cells, an HTML buffer)
//! and translates user events into [`Command`](super::Command)s. The
//! controller answers by calling back into the host with the new state.

use vitrine_core::{Facet, Product};

/// A modal panel of the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Filter,
    Sort,
}

impl Modal {
    /// DOM id of the modal element.
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Filter => "modal_filtrar",
            Self::Sort => "modal_ordenar",
        }
    }

    /// DOM id of the button that opens the modal.
    #[must_use]
    pub const fn opener_id(&self) -> &'static str {
        match self {
            Self::Filter => "filtrar",
            Self::Sort => "ordenar",
        }
    }

    /// CSS class of the modal's close icon.
    #[must_use]
    pub const fn close_class(&self) -> &'static str {
        match self {
            Self::Filter => "close-fil",
            Self::Sort => "close-ord",
        }
    }
}

/// Display projection of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    /// Formatted price, e.g. `R$ 129,90`.
    pub price: String,
    /// Plain decimal price carried on the buy control, e.g. `129.90`.
    pub price_value: String,
    /// Installment line, e.g. `até 3x de R$43,30`; `None` hides the line.
    pub installments: Option<String>,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price().display(),
            price_value: product.price.to_string(),
            installments: product.installments.and_then(|plan| plan.display()),
            image: product.image.clone(),
        }
    }
}

/// Widget operations the controller needs from a host.
///
/// Every method is a state assignment: calling it twice with the same
/// arguments must leave the host as if it were called once.
pub trait CatalogHost {
    /// Replace the product list with `cards`.
    ///
    /// A host without a product list container logs and skips the render.
    fn render_cards(&mut self, cards: &[ProductCard]);

    fn set_load_more_visible(&mut self, visible: bool);

    fn set_modal_visible(&mut self, modal: Modal, visible: bool);

    fn set_facet_group_expanded(&mut self, facet: Facet, expanded: bool);

    fn set_facet_checked(&mut self, facet: Facet, value: &str, checked: bool);

    /// Show or hide the apply/clear bar of the filter modal.
    fn set_action_bar_visible(&mut self, visible: bool);

    fn set_cart_count(&mut self, count: usize);

    /// Blocking notification to the shopper.
    fn alert(&mut self, message: &str);
}
