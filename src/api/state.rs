//! Application state for the dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the single record store handle used by every request.
#[derive(Clone)]
pub struct AppState {
    /// The record store backing the dashboard.
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state around a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
