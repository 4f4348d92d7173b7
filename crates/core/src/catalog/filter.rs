//! Category and name-search filtering for the storefront grid.

use serde::{Deserialize, Serialize};

use crate::types::{CATEGORY_ALL, Product};

/// Products in `products` matching `category` and `search`, in their original order.
///
/// A product matches when the category is [`CATEGORY_ALL`] or equals the
/// product's category exactly, and the product name contains `search`
/// case-insensitively. An empty search matches every name.
pub fn filter<'a>(products: &'a [Product], category: &str, search: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|product| category == CATEGORY_ALL || product.category == category)
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// The storefront's current browse selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Selected category, or `All`.
    pub category: String,
    /// Free-text name search.
    pub search: String,
}

impl CatalogFilter {
    /// Apply this selection to `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter(products, &self.category, &self.search)
    }

    /// Whether this selection passes every product through.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category == CATEGORY_ALL && self.search.is_empty()
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            search: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_all_with_empty_search_returns_everything_in_order() {
        let products = seed_products();
        let result = filter(&products, "All", "");
        assert_eq!(result.len(), products.len());
        for (filtered, original) in result.iter().zip(&products) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn test_category_and_search_combined() {
        let products = seed_products();
        let result = filter(&products, "Spices", "saffron");
        assert_eq!(names(&result), ["Saffron Threads Grade A+"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = seed_products();
        assert_eq!(names(&filter(&products, "All", "OUD")), ["Aromatic Oud Oil"]);
    }

    #[test]
    fn test_no_match() {
        let products = seed_products();
        assert!(filter(&products, "All", "xyz-nomatch").is_empty());
    }

    #[test]
    fn test_category_mismatch_excludes_name_match() {
        let products = seed_products();
        assert!(filter(&products, "Food", "saffron").is_empty());
    }

    #[test]
    fn test_category_is_exact_match() {
        let products = seed_products();
        assert!(filter(&products, "spices", "").is_empty());
        assert_eq!(filter(&products, "Decor", "").len(), 1);
    }

    #[test]
    fn test_catalog_filter_default_is_unfiltered() {
        let selection = CatalogFilter::default();
        assert!(selection.is_unfiltered());
        assert_eq!(selection.apply(&seed_products()).len(), 4);
    }
}
