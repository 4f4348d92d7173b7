//! `berrima demo`: a scripted session against the seed catalog.
//!
//! Shops a few items, edits the catalog from the admin view, generates copy
//! and checks out, printing every event the store publishes.

use tokio::sync::broadcast::Receiver;
use tracing::info;

use berrima_admin::claude::ClaudeClient;
use berrima_admin::{AdminConfig, Copywriter, Dashboard};
use berrima_core::{Price, ProductId, ProductUpdate};
use berrima_storefront::{Command, DEMO_NOTICE, Event, Store, View};

use super::{CommandError, print_products};

/// Run the demo session.
///
/// # Errors
///
/// Returns an error if the Claude client cannot be built or an event fails to
/// serialize.
#[allow(clippy::print_stdout)]
pub async fn run(config: &AdminConfig) -> Result<(), CommandError> {
    let copywriter = Copywriter::<ClaudeClient>::from_config(config.claude())?;
    let mut dashboard = Dashboard::new(copywriter);
    let mut store = Store::seeded();
    let mut events = store.subscribe();

    info!(products = store.state().catalog().len(), "Demo session started");

    println!("== Browse");
    store.dispatch(Command::Search {
        text: "saffron".to_string(),
    });
    print_products(store.state().visible_products());
    store.dispatch(Command::Search {
        text: String::new(),
    });
    print_events(&mut events)?;

    println!("\n== Cart");
    for id in ["1", "1", "3"] {
        store.dispatch(Command::AddToCart {
            id: ProductId::from(id),
        });
    }
    store.dispatch(Command::SetQuantity {
        id: ProductId::from("3"),
        quantity: 3,
    });
    store.dispatch(Command::DecrementQuantity {
        id: ProductId::from("3"),
    });
    for line in store.state().cart().lines() {
        println!(
            "  {} x{} = {}",
            line.product.name,
            line.quantity,
            line.line_total()
        );
    }
    println!("  Subtotal: {}", store.state().cart().subtotal());
    print_events(&mut events)?;

    println!("\n== Admin");
    store.dispatch(Command::ShowView { view: View::Admin });
    let created = store
        .dispatch(Command::CreateProduct)
        .into_iter()
        .find_map(|event| match event {
            Event::ProductCreated { id } => Some(id),
            _ => None,
        });

    if let Some(id) = created {
        let mut changed = store.dispatch(Command::UpdateProduct {
            id: id.clone(),
            update: ProductUpdate::default()
                .name("Rose Water Mist")
                .price(Price::parse("35.50")?)
                .category("Fragrance"),
        });
        if let Some(generated) = dashboard.generate_description(&mut store, &id).await {
            changed.extend(generated.events);
        }
        dashboard.refresh_on_change(&store, &changed).await;
    }
    print_products(store.state().catalog().products());

    let stats = dashboard.stats(store.state().catalog(), &mut rand::rng());
    println!("  Revenue: {}", stats.revenue);
    println!("  Insight: {}", dashboard.insight());
    print_events(&mut events)?;

    println!("\n== Checkout");
    store.dispatch(Command::ShowView {
        view: View::Checkout,
    });
    store.dispatch(Command::Checkout);
    println!("  {DEMO_NOTICE}");
    print_events(&mut events)?;

    Ok(())
}

/// Print every event received since the last call, one JSON object per line.
#[allow(clippy::print_stdout)]
fn print_events(events: &mut Receiver<Event>) -> Result<(), CommandError> {
    while let Ok(event) = events.try_recv() {
        println!("  event: {}", serde_json::to_string(&event)?);
    }
    Ok(())
}
