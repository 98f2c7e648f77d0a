//! Record store collaborator
//!
//! The insights engine works over in-memory snapshots fetched fresh per
//! request. This trait is the boundary to whatever holds the records; the
//! in-memory implementation backs tests and the demo server.

use async_trait::async_trait;
use thiserror::Error;

use cropflow_analytics::{Crop, Order};

/// Record fetch errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not produce a snapshot
    #[error("data unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Source of record snapshots
///
/// Each call returns a fresh, caller-owned snapshot. Implementations must
/// not hand out partial data: fail the whole fetch instead.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All orders
    async fn orders(&self) -> Result<Vec<Order>>;

    /// All crop batches
    async fn crops(&self) -> Result<Vec<Crop>>;
}

/// In-memory record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: Vec<Order>,
    crops: Vec<Crop>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed orders
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Seed crop batches
    pub fn with_crops(mut self, crops: Vec<Crop>) -> Self {
        self.crops = crops;
        self
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }

    async fn crops(&self) -> Result<Vec<Crop>> {
        Ok(self.crops.clone())
    }
}
