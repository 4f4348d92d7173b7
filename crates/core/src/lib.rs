//! Berrima Core - Shared domain library.
//!
//! This crate provides the domain model used across all Berrima Store components:
//! - `storefront` - Session store (catalog browsing, cart, checkout)
//! - `admin` - Inventory editing and AI-generated marketing copy
//! - `cli` - Command-line driver for the above
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP
//! clients, no async. Every operation here is a plain in-memory transformation.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, and the product record
//! - [`cart`] - Cart aggregation (one consolidated line per product)
//! - [`catalog`] - Catalog ownership, filtering, mutation and seed data
//! - [`stats`] - Dashboard figures derived from the catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod stats;
pub mod types;

pub use cart::{Cart, CartLine, QuantityChange};
pub use catalog::{Catalog, CatalogFilter, filter, seed_products};
pub use stats::{SalesPoint, StoreStats};
pub use types::*;
