//! `berrima describe` and `berrima insight`

use berrima_admin::claude::ClaudeClient;
use berrima_admin::{AdminConfig, Copywriter, Dashboard};
use berrima_core::ProductId;
use berrima_storefront::Store;

use super::CommandError;

fn dashboard(config: &AdminConfig) -> Result<Dashboard<ClaudeClient>, CommandError> {
    let copywriter = Copywriter::<ClaudeClient>::from_config(config.claude())?;
    Ok(Dashboard::new(copywriter))
}

/// Generate and print a description for product `id`.
///
/// # Errors
///
/// Returns an error if the Claude client cannot be built or `id` is not in the
/// catalog.
#[allow(clippy::print_stdout)]
pub async fn describe(config: &AdminConfig, id: &str) -> Result<(), CommandError> {
    let mut dashboard = dashboard(config)?;
    let mut store = Store::seeded();
    let id = ProductId::from(id);

    let generated = dashboard
        .generate_description(&mut store, &id)
        .await
        .ok_or_else(|| CommandError::UnknownProduct(id.to_string()))?;

    if let Some(product) = store.state().catalog().get(&id) {
        println!("{} ({})", product.name, product.category);
    }
    println!("{}", generated.text);
    Ok(())
}

/// Print dashboard stats and a marketing insight for the seed catalog.
///
/// # Errors
///
/// Returns an error if the Claude client cannot be built.
#[allow(clippy::print_stdout)]
pub async fn insight(config: &AdminConfig) -> Result<(), CommandError> {
    let mut dashboard = dashboard(config)?;
    let store = Store::seeded();

    let stats = dashboard.stats(store.state().catalog(), &mut rand::rng());
    println!("Revenue: {}", stats.revenue);
    println!("Sales:   {}", stats.sales);
    println!("Orders:  {}", stats.orders);
    for point in &stats.series {
        println!("  {:<10} {}", point.label, point.sales);
    }

    println!();
    println!("{}", dashboard.refresh_insight(&store).await);
    Ok(())
}
