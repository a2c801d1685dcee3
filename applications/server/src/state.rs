/// Shared application state
use roster_store::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store client is the only cross-request state; it is constructed once
/// at startup and injected here rather than reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
