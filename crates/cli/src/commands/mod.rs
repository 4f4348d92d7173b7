//! Subcommand implementations.

use thiserror::Error;

use berrima_admin::ConfigError;
use berrima_admin::claude::ClaudeError;
use berrima_core::{PriceError, Product};

pub mod catalog;
pub mod copy;
pub mod demo;

/// Errors a subcommand can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Claude client error: {0}")]
    Claude(#[from] ClaudeError),

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print one product per line.
#[allow(clippy::print_stdout)]
pub fn print_products<'a>(products: impl IntoIterator<Item = &'a Product>) {
    for product in products {
        println!(
            "{:>14}  {:<28} {:>9}  {:<10} stock {}",
            product.id.as_str(),
            product.name,
            product.price.to_string(),
            product.category,
            product.stock
        );
    }
}
