//! Session state owned by the store.

use berrima_core::{Cart, Catalog, CatalogFilter, Product};

use crate::command::View;

/// Everything a shopping session holds.
///
/// Read-only outside this crate; all mutation goes through
/// [`Store::dispatch`](crate::Store::dispatch).
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) catalog: Catalog,
    pub(crate) cart: Cart,
    pub(crate) view: View,
    pub(crate) cart_open: bool,
    pub(crate) browse: CatalogFilter,
}

impl SessionState {
    /// A fresh session over `catalog`: empty cart, store view, drawer closed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Whether the cart drawer is showing.
    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Current category and search selection of the store view.
    #[must_use]
    pub const fn browse(&self) -> &CatalogFilter {
        &self.browse
    }

    /// Catalog products passing the current browse selection.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.browse.apply(self.catalog.products())
    }
}
