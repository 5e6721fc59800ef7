//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for catalog domain concepts.

pub mod cart;
pub mod filter;
pub mod id;
pub mod price;
pub mod product;
pub mod sort;

pub use cart::CartEntry;
pub use filter::{Facet, FilterSelection, PriceRange, PriceRangeError};
pub use id::ProductId;
pub use price::{CurrencyCode, Price, format_decimal_br, round_to_cents};
pub use product::{Installments, Product};
pub use sort::SortOrder;
