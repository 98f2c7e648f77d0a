//! Domain record types and metric catalogs
//!
//! Three dashboards, one engine: each domain supplies a date accessor and
//! a metric catalog to the shared aggregation pipeline.

mod harvest;
mod planting;
mod sales;

pub use harvest::harvest;
pub use planting::planting;
pub use sales::sales;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed storefront order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: u64,
    /// When the order was completed; `None` for orders still open
    pub completed_at: Option<DateTime<Utc>>,
    /// Order total in dollars
    pub total: f64,
    /// Number of items in the order
    pub items: u32,
}

/// A tracked crop batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    /// Crop batch identifier
    pub id: u64,
    /// Crop name (e.g. "basil")
    pub name: String,
    /// Plants in the batch
    pub quantity: u32,
    /// When the batch was seeded
    pub seeded_at: Option<DateTime<Utc>>,
    /// When the batch was harvested; `None` while still growing
    pub harvested_at: Option<DateTime<Utc>>,
}

impl Crop {
    /// Days between seeding and harvest, when both are known
    pub fn days_to_harvest(&self) -> Option<i64> {
        let seeded = self.seeded_at?;
        let harvested = self.harvested_at?;
        Some((harvested.date_naive() - seeded.date_naive()).num_days())
    }
}
