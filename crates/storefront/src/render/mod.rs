//! Static HTML host.
//!
//! [`HtmlHost`] implements [`CatalogHost`] by remembering the latest state
//! of every widget and renders the whole catalog page on demand with
//! Askama. The markup carries the element ids and classes the page
//! scripts expect (`lista-produtos`, `modal_filtrar`, `.botao-comprar`,
//! `contador-carrinho`, ...).

use std::collections::BTreeSet;

use askama::Template;
use thiserror::Error;
use vitrine_core::{Facet, FilterSelection, SortOrder};

use crate::catalog::{CatalogHost, FacetOptions, Modal, ProductCard};

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// A facet accordion group for templates.
pub struct FacetGroupView {
    pub class: &'static str,
    pub label: &'static str,
    pub expanded: bool,
    pub options: Vec<FacetOptionView>,
}

/// A facet checkbox for templates.
pub struct FacetOptionView {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// A sort modal option for templates.
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
}

/// Catalog page template.
#[derive(Template)]
#[template(path = "catalog/page.html")]
pub struct CatalogPageTemplate<'a> {
    pub has_product_list: bool,
    pub cards: &'a [ProductCard],
    pub load_more_visible: bool,
    pub filter_open: bool,
    pub sort_open: bool,
    pub facet_groups: Vec<FacetGroupView>,
    pub sort_options: Vec<SortOptionView>,
    pub action_bar_visible: bool,
    pub cart_count: usize,
}

/// Host that keeps widget state in memory and renders it as HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlHost {
    options: FacetOptions,
    has_product_list: bool,
    cards: Vec<ProductCard>,
    load_more_visible: bool,
    filter_open: bool,
    sort_open: bool,
    expanded: BTreeSet<Facet>,
    checked: FilterSelection,
    action_bar_visible: bool,
    cart_count: usize,
    alerts: Vec<String>,
}

impl HtmlHost {
    /// A page offering `options` in its filter modal.
    #[must_use]
    pub fn new(options: FacetOptions) -> Self {
        Self {
            options,
            has_product_list: true,
            ..Self::default()
        }
    }

    /// A page whose markup has no `lista-produtos` container.
    ///
    /// Card renders are logged and dropped.
    #[must_use]
    pub fn without_product_list(options: FacetOptions) -> Self {
        Self {
            options,
            has_product_list: false,
            ..Self::default()
        }
    }

    /// Render the full catalog page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if Askama fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        let template = CatalogPageTemplate {
            has_product_list: self.has_product_list,
            cards: &self.cards,
            load_more_visible: self.load_more_visible,
            filter_open: self.filter_open,
            sort_open: self.sort_open,
            facet_groups: self.facet_groups(),
            sort_options: SortOrder::OPTIONS
                .iter()
                .map(|order| SortOptionView {
                    value: order.as_str(),
                    label: order.label(),
                })
                .collect(),
            action_bar_visible: self.action_bar_visible,
            cart_count: self.cart_count,
        };
        Ok(template.render()?)
    }

    fn facet_groups(&self) -> Vec<FacetGroupView> {
        Facet::ALL
            .iter()
            .map(|&facet| FacetGroupView {
                class: facet.options_class(),
                label: facet.label(),
                expanded: self.expanded.contains(&facet),
                options: self
                    .options
                    .for_facet(facet)
                    .iter()
                    .map(|option| FacetOptionView {
                        value: option.value.clone(),
                        label: option.label.clone(),
                        checked: self.checked.values(facet).contains(&option.value),
                    })
                    .collect(),
            })
            .collect()
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    #[must_use]
    pub const fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    #[must_use]
    pub const fn is_modal_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Filter => self.filter_open,
            Modal::Sort => self.sort_open,
        }
    }

    #[must_use]
    pub fn is_expanded(&self, facet: Facet) -> bool {
        self.expanded.contains(&facet)
    }

    #[must_use]
    pub fn is_checked(&self, facet: Facet, value: &str) -> bool {
        self.checked.values(facet).contains(value)
    }

    #[must_use]
    pub const fn action_bar_visible(&self) -> bool {
        self.action_bar_visible
    }

    #[must_use]
    pub const fn cart_count(&self) -> usize {
        self.cart_count
    }

    /// Alerts raised so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl CatalogHost for HtmlHost {
    fn render_cards(&mut self, cards: &[ProductCard]) {
        if !self.has_product_list {
            tracing::error!("Element lista-produtos not found, skipping product render");
            return;
        }
        self.cards = cards.to_vec();
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }

    fn set_modal_visible(&mut self, modal: Modal, visible: bool) {
        match modal {
            Modal::Filter => self.filter_open = visible,
            Modal::Sort => self.sort_open = visible,
        }
    }

    fn set_facet_group_expanded(&mut self, facet: Facet, expanded: bool) {
        if expanded {
            self.expanded.insert(facet);
        } else {
            self.expanded.remove(&facet);
        }
    }

    fn set_facet_checked(&mut self, facet: Facet, value: &str, checked: bool) {
        if self.is_checked(facet, value) != checked {
            self.checked.toggle(facet, value);
        }
    }

    fn set_action_bar_visible(&mut self, visible: bool) {
        self.action_bar_visible = visible;
    }

    fn set_cart_count(&mut self, count: usize) {
        self.cart_count = count;
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(alert = message, "Alert shown");
        self.alerts.push(message.to_owned());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use vitrine_core::{Installments, Product, ProductId};

    use super::*;
    use crate::catalog::{BuyControl, CatalogController, Command, DedupKey};

    fn product(id: &str, name: &str, color: &str, price: i64) -> Product {
        let mut p = Product::snapshot(ProductId::new(id), name, Decimal::new(price, 0));
        p.color = color.to_string();
        p.sizes = vec!["M".to_string()];
        p.installments = Some(Installments::new(2, Decimal::new(price * 50, 2)));
        p.image = format!("img/{id}.png");
        p
    }

    fn rendered_page(products: Vec<Product>, commands: Vec<Command>) -> (HtmlHost, String) {
        let mut host = HtmlHost::new(FacetOptions::from_products(&products));
        let mut controller = CatalogController::new(1280, DedupKey::Name);
        controller.dispatch(Command::Load(products), &mut host);
        for command in commands {
            controller.dispatch(command, &mut host);
        }
        let html = host.render().unwrap();
        (host, html)
    }

    #[test]
    fn test_page_contains_cards_and_buy_controls() {
        let (_, html) = rendered_page(vec![product("1", "Camiseta", "Preto", 1500)], vec![]);
        assert!(html.contains("id=\"lista-produtos\""));
        assert!(html.contains("Camiseta"));
        assert!(html.contains("R$ 1.500,00"));
        assert!(html.contains("até 2x de R$750,00"));
        assert!(html.contains("class=\"botao-comprar\""));
        assert!(html.contains("data-price=\"1500\""));
        assert!(html.contains("src=\"img/1.png\""));
    }

    #[test]
    fn test_load_more_button_only_when_needed() {
        let few: Vec<Product> = (0..3)
            .map(|i| product(&i.to_string(), &format!("P{i}"), "Preto", 10))
            .collect();
        let (_, html) = rendered_page(few, vec![]);
        assert!(!html.contains("load-more"));

        let many: Vec<Product> = (0..8)
            .map(|i| product(&i.to_string(), &format!("P{i}"), "Preto", 10))
            .collect();
        let (host, html) = rendered_page(many, vec![]);
        assert!(host.load_more_visible());
        assert!(html.contains("class=\"load-more\""));
    }

    #[test]
    fn test_modal_and_action_bar_state() {
        let (host, html) = rendered_page(
            vec![product("1", "A", "Preto", 10)],
            vec![
                Command::OpenModal(Modal::Filter),
                Command::ToggleFacetGroup(Facet::Color),
                Command::ToggleFacetValue {
                    facet: Facet::Color,
                    value: "Preto".to_string(),
                },
            ],
        );
        assert!(host.is_modal_open(Modal::Filter));
        assert!(!host.is_modal_open(Modal::Sort));
        assert!(host.is_expanded(Facet::Color));
        assert!(host.is_checked(Facet::Color, "Preto"));
        assert!(html.contains("id=\"modal_filtrar\" class=\"modal\" style=\"display: block\""));
        assert!(html.contains("id=\"modal_ordenar\" class=\"modal\" style=\"display: none\""));
        assert!(html.contains("class=\"botoes-acao\""));
        assert!(html.contains("value=\"Preto\" checked"));
    }

    #[test]
    fn test_cart_counter() {
        let (host, html) = rendered_page(
            vec![product("1", "A", "Preto", 10)],
            vec![
                Command::Buy(BuyControl::new("1", "A", "10")),
                Command::Buy(BuyControl::new("1", "A", "10")),
            ],
        );
        assert_eq!(host.cart_count(), 2);
        assert!(html.contains("<span id=\"contador-carrinho\">2</span>"));
    }

    #[test]
    fn test_card_without_installments_omits_line() {
        let mut bare = product("1", "Boné", "Preto", 49);
        bare.installments = None;
        let (_, html) = rendered_page(vec![bare], vec![]);
        assert!(html.contains("Boné"));
        assert!(!html.contains("class=\"parcelamento\""));
        assert!(!html.contains("0x de"));
    }

    #[test]
    fn test_missing_product_list_skips_cards() {
        let products = vec![product("1", "A", "Preto", 10)];
        let mut host = HtmlHost::without_product_list(FacetOptions::from_products(&products));
        let mut controller = CatalogController::new(1280, DedupKey::Name);
        controller.dispatch(Command::Load(products), &mut host);

        assert!(host.cards().is_empty());
        let html = host.render().unwrap();
        assert!(!html.contains("lista-produtos"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let (_, html) = rendered_page(vec![product("1", "<b>A</b>", "Preto", 10)], vec![]);
        assert!(!html.contains("<b>A</b>"));
        assert!(html.contains("&lt;b&gt;A"));
    }
}
