//! Harvest insight catalog
//!
//! Crop batches dated by harvest. Days-to-harvest averages only batches
//! with both dates known, and shorter is the improvement.

use crate::domains::Crop;
use crate::metric::{Domain, MetricDef};

/// The harvest domain
pub fn harvest() -> Domain<Crop> {
    Domain {
        name: "harvest",
        date: |crop| crop.harvested_at.map(|t| t.date_naive()),
        metrics: vec![
            MetricDef::count("harvests"),
            MetricDef::average("average_days_to_harvest", |crop: &Crop| {
                crop.days_to_harvest().map(|d| d as f64)
            })
            .lower_is_better(),
            MetricDef::distinct("harvest_varieties", |crop: &Crop| Some(crop.name.clone())),
        ],
    }
}
