//! Modal and accordion state of the catalog page.

use std::collections::BTreeSet;

use vitrine_core::Facet;

use super::host::Modal;

/// Which modals are open and which facet groups are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetPanel {
    filter_open: bool,
    sort_open: bool,
    expanded: BTreeSet<Facet>,
}

impl FacetPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Filter => self.filter_open,
            Modal::Sort => self.sort_open,
        }
    }

    pub const fn set_open(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::Filter => self.filter_open = open,
            Modal::Sort => self.sort_open = open,
        }
    }

    #[must_use]
    pub fn is_expanded(&self, facet: Facet) -> bool {
        self.expanded.contains(&facet)
    }

    /// Flip a facet group. Returns whether it is now expanded.
    pub fn toggle_group(&mut self, facet: Facet) -> bool {
        if self.expanded.remove(&facet) {
            false
        } else {
            self.expanded.insert(facet);
            true
        }
    }

    /// The apply/clear bar shows while any facet group is expanded.
    #[must_use]
    pub fn action_bar_visible(&self) -> bool {
        !self.expanded.is_empty()
    }
}
