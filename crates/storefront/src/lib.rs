//! Berrima Storefront library.
//!
//! Holds the per-session state of the shop: the shared catalog, the cart,
//! which view is showing and the store view's browse selection. The state has
//! exactly one owner, the [`Store`], and changes only through [`Command`]s.
//!
//! ```
//! use berrima_core::{Price, ProductId};
//! use berrima_storefront::{Command, Store};
//!
//! let mut store = Store::seeded();
//! store.dispatch(Command::AddToCart { id: ProductId::from("1") });
//! store.dispatch(Command::AddToCart { id: ProductId::from("1") });
//! store.dispatch(Command::AddToCart { id: ProductId::from("3") });
//!
//! assert_eq!(store.state().cart().subtotal(), Price::from_whole(285));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod command;
pub mod state;
pub mod store;

pub use checkout::{CheckoutReceipt, DEMO_NOTICE};
pub use command::{Command, Event, View};
pub use state::SessionState;
pub use store::Store;
