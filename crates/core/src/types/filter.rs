//! Facet selections for the catalog filter.
//!
//! A [`FilterSelection`] holds three independent sets of tokens, one per
//! [`Facet`]. An empty set places no constraint on its facet.

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A filterable product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Color,
    Size,
    Price,
}

impl Facet {
    /// All facets, in the order the filter modal lists them.
    pub const ALL: [Self; 3] = [Self::Color, Self::Size, Self::Price];

    /// CSS class of the checkbox group holding this facet's options.
    #[must_use]
    pub const fn options_class(&self) -> &'static str {
        match self {
            Self::Color => "opcoes-cores",
            Self::Size => "opcoes-tamanhos",
            Self::Price => "opcoes-precos",
        }
    }

    /// Heading shown on the facet's accordion group.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Color => "Cores",
            Self::Size => "Tamanhos",
            Self::Price => "Faixa de preço",
        }
    }
}

/// Errors that can occur when parsing a [`PriceRange`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceRangeError {
    /// The token has no `-` separator.
    #[error("price range must look like \"min-max\"")]
    MissingSeparator,
    /// A bound is not a decimal number.
    #[error("invalid price bound: {0:?}")]
    InvalidBound(String),
    /// The lower bound is above the upper bound.
    #[error("price range minimum exceeds maximum")]
    Inverted,
}

/// An inclusive price interval parsed from a `"min-max"` token.
///
/// `"500-"` leaves the upper bound open.
///
/// ```
/// use rust_decimal::Decimal;
/// use vitrine_core::PriceRange;
///
/// let range: PriceRange = "0-100".parse().unwrap();
/// assert!(range.contains(Decimal::new(100, 0)));
/// assert!(!range.contains(Decimal::new(10001, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Parse a `PriceRange` from a `"min-max"` token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token has no `-`, a bound is not a number,
    /// or the minimum is above the maximum.
    pub fn parse(token: &str) -> Result<Self, PriceRangeError> {
        let (min, max) = token
            .trim()
            .split_once('-')
            .ok_or(PriceRangeError::MissingSeparator)?;

        let min = parse_bound(min)?;
        let max = if max.trim().is_empty() {
            None
        } else {
            Some(parse_bound(max)?)
        };

        if max.is_some_and(|max| min > max) {
            return Err(PriceRangeError::Inverted);
        }

        Ok(Self { min, max })
    }

    /// Whether `price` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(raw: &str) -> Result<Decimal, PriceRangeError> {
    let raw = raw.trim();
    Decimal::from_str(raw).map_err(|_| PriceRangeError::InvalidBound(raw.to_owned()))
}

impl FromStr for PriceRange {
    type Err = PriceRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The checked options of the filter modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub prices: BTreeSet<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no facet is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.prices.is_empty()
    }

    /// Tokens selected for `facet`.
    #[must_use]
    pub const fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Color => &self.colors,
            Facet::Size => &self.sizes,
            Facet::Price => &self.prices,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Color => &mut self.colors,
            Facet::Size => &mut self.sizes,
            Facet::Price => &mut self.prices,
        }
    }

    /// Check or uncheck `value` under `facet`. Returns whether it is now checked.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let values = self.values_mut(facet);
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_owned());
            true
        }
    }

    /// Builder-style insert, handy when assembling a selection in one go.
    #[must_use]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.values_mut(facet).insert(value.into());
        self
    }

    /// Uncheck everything.
    pub fn clear(&mut self) {
        self.colors.clear();
        self.sizes.clear();
        self.prices.clear();
    }
}
