//! Vitrine Storefront library.
//!
//! This crate provides the catalog view-model, the catalog loader and an
//! HTML host as a library, allowing them to be tested and reused by other
//! hosts.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
