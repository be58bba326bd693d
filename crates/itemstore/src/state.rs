//! Application state shared across request handlers.

use std::sync::Arc;

use itemstore_core::storage::ItemStore;

/// Shared application state.
///
/// Cloned for each request handler. The store handle (configuration,
/// credentials, connection pool) is built once at startup and never mutated
/// afterwards, so no locking discipline is needed here.
#[derive(Clone)]
pub struct AppState {
    /// Item store the submit handler writes through.
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    /// Creates state backed by the given store.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}
