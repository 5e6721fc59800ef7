//! Vitrine Core - Shared catalog types.
//!
//! This crate provides the domain types used by the Vitrine storefront:
//! - `storefront` - Catalog view-model, loader and HTML host
//! - `integration-tests` - End-to-end tests over the public API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no rendering. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, prices, facet selections and sort orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
