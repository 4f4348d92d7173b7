//! Cart aggregation.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product id. Adding a product
//! that is already in the cart bumps the existing line's quantity instead of
//! appending a second line.
//!
//! # Snapshot semantics
//!
//! A line copies every product field at the moment the product is first
//! added. Later edits to the catalog (price changes, renames, even deletion)
//! do not reach lines that are already in the cart.
//!
//! # Quantity policy
//!
//! Quantities are always at least 1:
//! - [`Cart::decrement`] stops at 1
//! - [`Cart::update_quantity`] with a value of 0 or less removes the line

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// One consolidated entry per distinct product in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product taken when it was first added.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, never below 1.
    pub quantity: u32,
}

impl CartLine {
    /// The product id this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line with that id exists.
    Unchanged,
    /// The line now holds this many units.
    Updated(u32),
    /// The requested quantity was 0 or less, so the line was removed.
    Removed,
}

/// A per-session shopping cart.
///
/// Lines are kept in the order their products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Returns the resulting quantity of the product's line.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the line for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of 0 or less removes the line. Quantities larger than
    /// `u32::MAX` are saturated.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> QuantityChange {
        if self.get(id).is_none() {
            return QuantityChange::Unchanged;
        }

        if quantity <= 0 {
            self.remove(id);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
        QuantityChange::Updated(quantity)
    }

    /// Add one unit to an existing line.
    pub fn increment(&mut self, id: &ProductId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Take one unit off an existing line, stopping at 1.
    pub fn decrement(&mut self, id: &ProductId) -> Option<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Some(line.quantity)
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductUpdate;

    fn product(id: &str, price: i64) -> Product {
        let mut product = Product::placeholder(ProductId::from(id));
        product.apply(
            ProductUpdate::default()
                .name(format!("Product {id}"))
                .price(Price::from_whole(price)),
        );
        product
    }

    #[test]
    fn test_add_same_product_twice_consolidates() {
        let mut cart = Cart::new();
        let honey = product("1", 120);

        assert_eq!(cart.add(&honey), 1);
        assert_eq!(cart.add(&honey), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_keeps_first_insertion_order() {
        let mut cart = Cart::new();
        let a = product("a", 1);
        let b = product("b", 2);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_add_does_not_refresh_snapshot() {
        let mut cart = Cart::new();
        let mut honey = product("1", 120);
        cart.add(&honey);

        honey.apply(ProductUpdate::default().price(Price::from_whole(1)).name("Renamed"));
        cart.add(&honey);

        let line = cart.get(&ProductId::from("1")).expect("line");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.price, Price::from_whole(120));
        assert_eq!(line.product.name, "Product 1");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 120));
        let before = cart.clone();

        assert!(!cart.remove(&ProductId::from("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_present() {
        let mut cart = Cart::new();
        cart.add(&product("1", 120));
        cart.add(&product("2", 45));

        assert!(cart.remove(&ProductId::from("1")));
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::from("1")).is_none());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        let honey = product("1", 120);
        cart.add(&honey);
        cart.add(&honey);
        cart.add(&product("3", 45));

        assert_eq!(cart.subtotal(), Price::from_whole(285));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_subtotal_saturates_on_huge_lines() {
        let mut cart = Cart::new();
        let mut whale = product("1", 0);
        whale.price = Price::parse("100000000000000000000").expect("price");
        cart.add(&whale);
        cart.add(&product("2", 10));

        let id = ProductId::from("1");
        cart.update_quantity(&id, i64::from(u32::MAX));
        cart.update_quantity(&ProductId::from("2"), i64::MAX);

        assert_eq!(cart.get(&id).map(|line| line.quantity), Some(u32::MAX));
        assert_eq!(
            cart.subtotal(),
            Price::new(rust_decimal::Decimal::MAX)
        );
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let id = ProductId::from("1");
        cart.add(&product("1", 10));

        assert_eq!(cart.update_quantity(&id, 7), QuantityChange::Updated(7));
        assert_eq!(cart.get(&id).map(|l| l.quantity), Some(7));
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 10));
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity(&ProductId::from("2"), 5),
            QuantityChange::Unchanged
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&product("1", 10));
        cart.add(&product("2", 10));

        assert_eq!(
            cart.update_quantity(&ProductId::from("1"), 0),
            QuantityChange::Removed
        );
        assert_eq!(
            cart.update_quantity(&ProductId::from("2"), -4),
            QuantityChange::Removed
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_saturates() {
        let mut cart = Cart::new();
        let id = ProductId::from("1");
        cart.add(&product("1", 10));

        assert_eq!(
            cart.update_quantity(&id, i64::MAX),
            QuantityChange::Updated(u32::MAX)
        );
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        let id = ProductId::from("1");
        cart.add(&product("1", 10));
        cart.add(&product("1", 10));

        assert_eq!(cart.decrement(&id), Some(1));
        assert_eq!(cart.decrement(&id), Some(1));
        assert_eq!(cart.increment(&id), Some(2));
        assert_eq!(cart.decrement(&ProductId::from("missing")), None);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1", 10));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_serializes_flat() {
        let mut cart = Cart::new();
        cart.add(&product("1", 10));
        let value = serde_json::to_value(&cart.lines()[0]).expect("serialize");
        assert_eq!(value["id"], "1");
        assert_eq!(value["quantity"], 1);
    }
}
