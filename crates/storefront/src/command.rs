//! Commands accepted by the session store and the events they produce.

use serde::{Deserialize, Serialize};

use berrima_core::{CatalogFilter, ProductId, ProductUpdate};

use crate::checkout::CheckoutReceipt;

/// Top-level screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Store,
    Admin,
    Checkout,
}

/// A discrete user action against the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Add one unit of a catalog product to the cart and show the cart.
    AddToCart { id: ProductId },
    RemoveFromCart { id: ProductId },
    /// Set a line's quantity directly. 0 or less removes the line.
    SetQuantity { id: ProductId, quantity: i64 },
    IncrementQuantity { id: ProductId },
    /// Take one unit off a line, never going below 1.
    DecrementQuantity { id: ProductId },
    OpenCart,
    CloseCart,
    /// Acknowledge the order, clear the cart and close the drawer.
    Checkout,
    ShowView { view: View },
    SelectCategory { category: String },
    Search { text: String },
    CreateProduct,
    UpdateProduct { id: ProductId, update: ProductUpdate },
    DeleteProduct { id: ProductId },
}

/// A state change that happened in response to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CartItemAdded { id: ProductId, quantity: u32 },
    CartItemRemoved { id: ProductId },
    CartQuantityChanged { id: ProductId, quantity: u32 },
    CartOpened,
    CartClosed,
    CheckedOut { receipt: CheckoutReceipt },
    ViewChanged { view: View },
    BrowseChanged { filter: CatalogFilter },
    ProductCreated { id: ProductId },
    ProductUpdated { id: ProductId },
    ProductDeleted { id: ProductId },
}

impl Event {
    /// Whether this event changed the catalog.
    #[must_use]
    pub const fn changes_catalog(&self) -> bool {
        matches!(
            self,
            Self::ProductCreated { .. } | Self::ProductUpdated { .. } | Self::ProductDeleted { .. }
        )
    }

    /// Whether this event changed the cart contents.
    #[must_use]
    pub const fn changes_cart(&self) -> bool {
        matches!(
            self,
            Self::CartItemAdded { .. }
                | Self::CartItemRemoved { .. }
                | Self::CartQuantityChanged { .. }
                | Self::CheckedOut { .. }
        )
    }
}
