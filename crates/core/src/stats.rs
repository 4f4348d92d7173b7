//! Dashboard figures derived from the catalog.
//!
//! The demo store has no order history, so revenue is estimated from stock
//! depletion: every product is assumed to have started at
//! [`BASELINE_STOCK`] units, and each missing unit was sold at the current
//! price. The sales series is illustrative only and drawn at random.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::Price;

/// Assumed starting stock for every product.
pub const BASELINE_STOCK: i64 = 50;

/// Units-sold counter shown on the dashboard.
pub const DEMO_SALES: u32 = 124;

/// Orders counter shown on the dashboard.
pub const DEMO_ORDERS: u32 = 86;

const CHART_LABEL_CHARS: usize = 10;

/// One bar of the dashboard sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// First characters of the product name.
    pub label: String,
    pub sales: u32,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub revenue: Price,
    pub sales: u32,
    pub orders: u32,
    pub series: Vec<SalesPoint>,
}

impl StoreStats {
    /// Compute dashboard stats for `catalog`, drawing chart values from `rng`.
    pub fn from_catalog<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let revenue = catalog
            .products()
            .iter()
            .map(|p| {
                let sold = Decimal::from(BASELINE_STOCK) - Decimal::from(p.stock);
                p.price.scaled(sold)
            })
            .sum();

        let series = catalog
            .products()
            .iter()
            .map(|p| SalesPoint {
                label: p.name.chars().take(CHART_LABEL_CHARS).collect(),
                sales: rng.random_range(10..60),
            })
            .collect();

        Self {
            revenue,
            sales: DEMO_SALES,
            orders: DEMO_ORDERS,
            series,
        }
    }
}
