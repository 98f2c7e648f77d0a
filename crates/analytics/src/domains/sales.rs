//! Sales insight catalog
//!
//! Orders dated by completion. Revenue, order count, items sold, and the
//! derived average order value.

use crate::domains::Order;
use crate::metric::{Domain, MetricDef};

/// The sales domain
pub fn sales() -> Domain<Order> {
    Domain {
        name: "sales",
        date: |order| order.completed_at.map(|t| t.date_naive()),
        metrics: vec![
            MetricDef::sum("total_revenue", |order: &Order| Some(order.total)),
            MetricDef::count("total_orders"),
            MetricDef::sum("items_sold", |order: &Order| Some(order.items as f64)),
            MetricDef::ratio("average_order_value", "total_revenue", "total_orders"),
        ],
    }
}
