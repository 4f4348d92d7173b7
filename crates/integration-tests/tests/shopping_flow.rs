//! Integration tests for a shopping session driven through the store.

use berrima_core::{Price, ProductId};
use berrima_integration_tests::store_with_cart;
use berrima_storefront::{Command, Event, Store, View};

// =============================================================================
// Cart Aggregation
// =============================================================================

#[test]
fn test_adding_same_product_twice_consolidates() {
    let store = store_with_cart(&["1", "1"]);
    let cart = store.state().cart();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn test_subtotal_across_lines() {
    let store = store_with_cart(&["1", "1", "3"]);
    assert_eq!(store.state().cart().subtotal(), Price::from_whole(285));
}

#[test]
fn test_cart_keeps_first_add_order() {
    let store = store_with_cart(&["3", "1", "3", "2"]);
    let ids: Vec<&str> = store
        .state()
        .cart()
        .lines()
        .iter()
        .map(|line| line.id().as_str())
        .collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut store = store_with_cart(&["1"]);
    let events = store.dispatch(Command::RemoveFromCart {
        id: ProductId::from("4"),
    });

    assert!(events.is_empty());
    assert_eq!(store.state().cart().len(), 1);
}

#[test]
fn test_quantity_controls() {
    let mut store = store_with_cart(&["2"]);
    let id = ProductId::from("2");

    store.dispatch(Command::DecrementQuantity { id: id.clone() });
    assert_eq!(store.state().cart().get(&id).map(|l| l.quantity), Some(1));

    store.dispatch(Command::IncrementQuantity { id: id.clone() });
    store.dispatch(Command::IncrementQuantity { id: id.clone() });
    assert_eq!(store.state().cart().get(&id).map(|l| l.quantity), Some(3));

    let events = store.dispatch(Command::SetQuantity {
        id: id.clone(),
        quantity: 0,
    });
    assert_eq!(events, vec![Event::CartItemRemoved { id: id.clone() }]);
    assert!(store.state().cart().get(&id).is_none());
}

#[test]
fn test_add_opens_cart_drawer() {
    let mut store = Store::seeded();
    assert!(!store.state().cart_open());

    let events = store.dispatch(Command::AddToCart {
        id: ProductId::from("1"),
    });
    assert!(store.state().cart_open());
    assert!(events.contains(&Event::CartOpened));
}

// =============================================================================
// Snapshot Semantics
// =============================================================================

#[test]
fn test_deleted_product_stays_in_cart() {
    let mut store = store_with_cart(&["4"]);
    store.dispatch(Command::DeleteProduct {
        id: ProductId::from("4"),
    });

    assert!(store.state().catalog().get(&ProductId::from("4")).is_none());
    assert_eq!(store.state().cart().len(), 1);
    assert_eq!(store.state().cart().subtotal(), Price::from_whole(150));
}

#[test]
fn test_price_change_does_not_refresh_cart_line() {
    let mut store = store_with_cart(&["1"]);
    store.dispatch(Command::UpdateProduct {
        id: ProductId::from("1"),
        update: berrima_core::ProductUpdate::default().price(Price::from_whole(999)),
    });
    store.dispatch(Command::AddToCart {
        id: ProductId::from("1"),
    });

    let line = &store.state().cart().lines()[0];
    assert_eq!(line.quantity, 2);
    assert_eq!(line.product.price, Price::from_whole(120));
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_checkout_clears_cart_and_reports_total() {
    let mut store = store_with_cart(&["1", "1", "3"]);
    store.dispatch(Command::ShowView {
        view: View::Checkout,
    });
    let events = store.dispatch(Command::Checkout);

    let receipt = events
        .iter()
        .find_map(|event| match event {
            Event::CheckedOut { receipt } => Some(receipt),
            _ => None,
        })
        .expect("checkout event");
    assert_eq!(receipt.total, Price::from_whole(285));
    assert_eq!(receipt.item_count, 3);
    assert!(store.state().cart().is_empty());
    assert!(!store.state().cart_open());
}

#[test]
fn test_checkout_empty_cart_succeeds() {
    let mut store = Store::seeded();
    let events = store.dispatch(Command::Checkout);
    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::CheckedOut { receipt } if receipt.total == Price::ZERO))
    );
}

// =============================================================================
// Subscribers
// =============================================================================

#[tokio::test]
async fn test_subscriber_sees_dispatched_events() {
    let mut store = Store::seeded();
    let mut events = store.subscribe();

    store.dispatch(Command::AddToCart {
        id: ProductId::from("3"),
    });
    store.dispatch(Command::CloseCart);

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(
        received,
        vec![
            Event::CartItemAdded {
                id: ProductId::from("3"),
                quantity: 1,
            },
            Event::CartOpened,
            Event::CartClosed,
        ]
    );
}

#[test]
fn test_event_json_is_tagged() {
    let event = Event::CartItemAdded {
        id: ProductId::from("3"),
        quantity: 2,
    };
    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"type": "cart_item_added", "id": "3", "quantity": 2})
    );
}
