//! The product catalog.
//!
//! The catalog is the ordered set of sellable products. Only the admin
//! operations ([`Catalog::create_product`], [`Catalog::update_product`],
//! [`Catalog::delete_product`]) mutate it; the storefront only reads it
//! through [`filter`].
//!
//! Deleting a product does not reach into any cart. Cart lines are snapshots
//! (see [`crate::cart`]).

mod filter;
mod seed;

pub use filter::{CatalogFilter, filter};
pub use seed::seed_products;

use crate::types::{Product, ProductId, ProductIdGenerator, ProductUpdate};

/// An ordered, mutable list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    ids: ProductIdGenerator,
}

impl Catalog {
    /// Create a catalog holding `products` in the given order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ids: ProductIdGenerator::new(),
        }
    }

    /// Create a catalog holding the seed products.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `category` and `search`. See [`filter`].
    #[must_use]
    pub fn filter(&self, category: &str, search: &str) -> Vec<&Product> {
        filter(&self.products, category, search)
    }

    /// Append a placeholder product with a fresh id and return that id.
    pub fn create_product(&mut self) -> ProductId {
        let products = &self.products;
        let id = self
            .ids
            .next_id(|candidate| products.iter().any(|p| &p.id == candidate));
        self.products.push(Product::placeholder(id.clone()));
        id
    }

    /// Merge `update` into the product with `id`. Returns `false` if absent.
    pub fn update_product(&mut self, id: &ProductId, update: ProductUpdate) -> bool {
        match self.products.iter_mut().find(|product| &product.id == id) {
            Some(product) => {
                product.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the product with `id`, returning it if it existed.
    pub fn delete_product(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| &product.id == id)?;
        Some(self.products.remove(index))
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
