//! Products and partial product updates.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Pseudo-category that matches every product when filtering.
pub const CATEGORY_ALL: &str = "All";

/// Categories offered by the storefront, in display order.
pub const CATEGORIES: [&str; 5] = [CATEGORY_ALL, "Food", "Fragrance", "Spices", "Decor"];

/// Category given to products created from the admin dashboard.
pub const DEFAULT_CATEGORY: &str = "Food";

const NEW_PRODUCT_NAME: &str = "New Product";
const NEW_PRODUCT_DESCRIPTION: &str = "Click edit to add details...";
const NEW_PRODUCT_IMAGE: &str = "https://picsum.photos/400/300";
const NEW_PRODUCT_STOCK: i64 = 10;

/// Categories a product can be assigned to (everything except `All`).
pub fn assignable_categories() -> impl Iterator<Item = &'static str> {
    CATEGORIES.into_iter().filter(|c| *c != CATEGORY_ALL)
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Free-text marketing description.
    pub description: String,
    /// Category name, e.g. `Spices`.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Units in stock. Not clamped, so it may go negative.
    pub stock: i64,
}

impl Product {
    /// A freshly created product with placeholder fields.
    #[must_use]
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            name: NEW_PRODUCT_NAME.to_string(),
            price: Price::ZERO,
            description: NEW_PRODUCT_DESCRIPTION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            image: NEW_PRODUCT_IMAGE.to_string(),
            stock: NEW_PRODUCT_STOCK,
        }
    }

    /// Merge the set fields of `update` into this product.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, update: ProductUpdate) {
        let ProductUpdate {
            name,
            price,
            description,
            category,
            image,
            stock,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
    }
}

/// A partial set of product fields to merge into an existing product.
///
/// ```
/// use berrima_core::{Price, ProductUpdate};
///
/// let update = ProductUpdate::default().price(Price::from_whole(999));
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl ProductUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub const fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
            && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let product = Product::placeholder(ProductId::from("99"));
        assert_eq!(product.name, "New Product");
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.description, "Click edit to add details...");
        assert_eq!(product.category, "Food");
        assert_eq!(product.image, "https://picsum.photos/400/300");
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_apply_only_touches_set_fields() {
        let mut product = Product::placeholder(ProductId::from("1"));
        let before = product.clone();

        product.apply(ProductUpdate::default().price(Price::from_whole(999)));

        assert_eq!(product.price, Price::from_whole(999));
        assert_eq!(
            Product {
                price: before.price,
                ..product
            },
            before
        );
    }

    #[test]
    fn test_apply_allows_negative_stock() {
        let mut product = Product::placeholder(ProductId::from("1"));
        product.apply(ProductUpdate::default().stock(-3));
        assert_eq!(product.stock, -3);
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: ProductUpdate =
            serde_json::from_str(r#"{"name":"Rose Water","stock":4}"#).expect("deserialize");
        assert_eq!(update, ProductUpdate::default().name("Rose Water").stock(4));
    }

    #[test]
    fn test_assignable_categories_exclude_all() {
        let categories: Vec<_> = assignable_categories().collect();
        assert_eq!(categories, ["Food", "Fragrance", "Spices", "Decor"]);
    }
}
