//! Demo checkout.
//!
//! There is no payment processing: checking out records what was in the cart,
//! hands back a receipt, and always succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use berrima_core::{Cart, CartLine, Price};

/// Notice shown to the shopper after checkout.
pub const DEMO_NOTICE: &str =
    "This is a demo! Checkout functionality would process your payment now.";

/// Acknowledgement of a completed (simulated) checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub confirmation: Uuid,
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    /// Build a receipt for the current contents of `cart`.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self {
            confirmation: Uuid::new_v4(),
            lines: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total: cart.subtotal(),
            placed_at: Utc::now(),
        }
    }
}
