//! `berrima catalog`

use berrima_core::Catalog;

use super::print_products;

/// List seed catalog products passing `category` and `search`.
#[allow(clippy::print_stdout)]
pub fn list(category: &str, search: &str) {
    let catalog = Catalog::seeded();
    let products = catalog.filter(category, search);

    if products.is_empty() {
        println!("No products match.");
        return;
    }
    print_products(products);
}
