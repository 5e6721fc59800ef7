//! Catalog product records.
//!
//! The field names on the wire follow the catalog endpoint
//! (`parcelamento`, `size`, `date`); the Rust names describe what they hold.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Installment plan: how many payments, and the amount of each.
///
/// Serialized as a two-element array, `[count, amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, Decimal)", into = "(u32, Decimal)")]
pub struct Installments {
    /// Number of payments.
    pub count: u32,
    /// Amount of each payment.
    pub amount: Decimal,
}

impl Installments {
    #[must_use]
    pub const fn new(count: u32, amount: Decimal) -> Self {
        Self { count, amount }
    }

    /// Human-readable installment line, e.g. `até 3x de R$43,30`.
    ///
    /// `None` for a plan with no payments.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        (self.count > 0).then(|| {
            format!(
                "até {}x de {}",
                self.count,
                Price::brl(self.amount).display_compact()
            )
        })
    }
}

impl From<(u32, Decimal)> for Installments {
    fn from((count, amount): (u32, Decimal)) -> Self {
        Self { count, amount }
    }
}

impl From<Installments> for (u32, Decimal) {
    fn from(plan: Installments) -> Self {
        (plan.count, plan.amount)
    }
}

/// A product as listed by the catalog endpoint.
///
/// Two records with the same `name` are shown as a single card; see
/// `DedupKey` in the storefront crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Absent when the endpoint sends no `parcelamento`.
    #[serde(rename = "parcelamento", default)]
    pub installments: Option<Installments>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "size", default)]
    pub sizes: Vec<String>,
    /// Listing date as sent by the endpoint (normally `YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
}

impl Product {
    /// Create a product with only the fields a buy control carries.
    ///
    /// The remaining fields are left empty.
    #[must_use]
    pub fn snapshot(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            installments: None,
            image: String::new(),
            color: String::new(),
            sizes: Vec::new(),
            date: String::new(),
        }
    }

    /// Price in the storefront currency.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::brl(self.price)
    }

    /// Parsed listing date, or `None` if `date` is not `YYYY-MM-DD`.
    #[must_use]
    pub fn listed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}
