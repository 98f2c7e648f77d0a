//! Planting insight catalog
//!
//! Crop batches dated by seeding.

use crate::domains::Crop;
use crate::metric::{Domain, MetricDef};

/// The planting domain
pub fn planting() -> Domain<Crop> {
    Domain {
        name: "planting",
        date: |crop| crop.seeded_at.map(|t| t.date_naive()),
        metrics: vec![
            MetricDef::count("crops_planted"),
            MetricDef::sum("plants_seeded", |crop: &Crop| Some(crop.quantity as f64)),
            MetricDef::distinct("crop_varieties", |crop: &Crop| Some(crop.name.clone())),
        ],
    }
}
