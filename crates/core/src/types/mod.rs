//! Core types for the Berrima Store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::{ProductId, ProductIdGenerator};
pub use price::{Price, PriceError};
pub use product::{
    CATEGORIES, CATEGORY_ALL, DEFAULT_CATEGORY, Product, ProductUpdate, assignable_categories,
};
