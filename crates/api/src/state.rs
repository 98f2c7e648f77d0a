//! Application state
//!
//! Shared state for API handlers: the record store the insight routes
//! fetch their snapshots from.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Record source for insight snapshots
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create new application state over a record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
