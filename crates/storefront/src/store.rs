//! The session store: a single owner for catalog, cart and view state.
//!
//! Every mutation is a [`Command`] passed to [`Store::dispatch`], which
//! applies it and returns the resulting [`Event`]s. The same events are
//! broadcast to every [`Store::subscribe`] receiver, so views can re-render
//! without holding references into the state.
//!
//! Commands that refer to an unknown product id are no-ops and produce no
//! events.

use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use berrima_core::{Catalog, ProductId, QuantityChange};

use crate::checkout::CheckoutReceipt;
use crate::command::{Command, Event, View};
use crate::state::SessionState;

/// Buffered events per subscriber before slow receivers start lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owned session state plus its event channel.
#[derive(Debug)]
pub struct Store {
    state: SessionState,
    events: broadcast::Sender<Event>,
}

impl Store {
    /// Create a store over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: SessionState::new(catalog),
            events,
        }
    }

    /// Create a store over the seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    /// Get a read-only view of the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The top-level view the session is showing.
    #[must_use]
    pub const fn view(&self) -> View {
        self.state.view
    }

    /// Receive every event dispatched from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Apply `command` and publish the resulting events.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Vec<Event> {
        let events = self.apply(command);

        for event in &events {
            // Err only means nobody is subscribed.
            let _ = self.events.send(event.clone());
        }

        debug!(count = events.len(), "Command applied");
        events
    }

    fn apply(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::AddToCart { id } => self.add_to_cart(id),
            Command::RemoveFromCart { id } => {
                if self.state.cart.remove(&id) {
                    vec![Event::CartItemRemoved { id }]
                } else {
                    Vec::new()
                }
            }
            Command::SetQuantity { id, quantity } => {
                match self.state.cart.update_quantity(&id, quantity) {
                    QuantityChange::Updated(quantity) => {
                        vec![Event::CartQuantityChanged { id, quantity }]
                    }
                    QuantityChange::Removed => vec![Event::CartItemRemoved { id }],
                    QuantityChange::Unchanged => Vec::new(),
                }
            }
            Command::IncrementQuantity { id } => {
                let change = self.state.cart.increment(&id);
                Self::quantity_event(id, None, change)
            }
            Command::DecrementQuantity { id } => {
                let before = self.state.cart.get(&id).map(|line| line.quantity);
                let change = self.state.cart.decrement(&id);
                Self::quantity_event(id, before, change)
            }
            Command::OpenCart => self.set_cart_open(true).into_iter().collect(),
            Command::CloseCart => self.set_cart_open(false).into_iter().collect(),
            Command::Checkout => self.checkout(),
            Command::ShowView { view } => {
                if self.state.view == view {
                    return Vec::new();
                }
                self.state.view = view;
                vec![Event::ViewChanged { view }]
            }
            Command::SelectCategory { category } => {
                if self.state.browse.category == category {
                    return Vec::new();
                }
                self.state.browse.category = category;
                vec![self.browse_changed()]
            }
            Command::Search { text } => {
                if self.state.browse.search == text {
                    return Vec::new();
                }
                self.state.browse.search = text;
                vec![self.browse_changed()]
            }
            Command::CreateProduct => {
                let id = self.state.catalog.create_product();
                info!(product_id = %id, "Product created");
                vec![Event::ProductCreated { id }]
            }
            Command::UpdateProduct { id, update } => {
                if self.state.catalog.update_product(&id, update) {
                    vec![Event::ProductUpdated { id }]
                } else {
                    Vec::new()
                }
            }
            Command::DeleteProduct { id } => {
                if self.state.catalog.delete_product(&id).is_some() {
                    info!(product_id = %id, "Product deleted");
                    vec![Event::ProductDeleted { id }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn add_to_cart(&mut self, id: ProductId) -> Vec<Event> {
        let Some(product) = self.state.catalog.get(&id) else {
            debug!(product_id = %id, "Add to cart ignored, product not in catalog");
            return Vec::new();
        };

        let quantity = self.state.cart.add(product);
        let mut events = vec![Event::CartItemAdded { id, quantity }];
        events.extend(self.set_cart_open(true));
        events
    }

    fn quantity_event(
        id: ProductId,
        before: Option<u32>,
        after: Option<u32>,
    ) -> Vec<Event> {
        match after {
            Some(quantity) if before != Some(quantity) => {
                vec![Event::CartQuantityChanged { id, quantity }]
            }
            _ => Vec::new(),
        }
    }

    fn set_cart_open(&mut self, open: bool) -> Option<Event> {
        if self.state.cart_open == open {
            return None;
        }
        self.state.cart_open = open;
        Some(if open {
            Event::CartOpened
        } else {
            Event::CartClosed
        })
    }

    fn checkout(&mut self) -> Vec<Event> {
        let receipt = CheckoutReceipt::for_cart(&self.state.cart);
        self.state.cart.clear();

        info!(
            confirmation = %receipt.confirmation,
            items = receipt.item_count,
            total = %receipt.total,
            "Checkout completed"
        );

        let mut events = vec![Event::CheckedOut { receipt }];
        events.extend(self.set_cart_open(false));
        events
    }

    fn browse_changed(&self) -> Event {
        Event::BrowseChanged {
            filter: self.state.browse.clone(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

impl From<Catalog> for Store {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
