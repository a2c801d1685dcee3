/// Common test utilities and fixtures
use axum::Router;
use roster_server::{api, state::AppState};
use roster_store::memory::MemoryStore;
use std::sync::Arc;

/// Build the full service router over a fresh in-memory store.
///
/// The store handle is returned alongside the app so tests can inspect
/// persisted state without going through HTTP.
pub fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    (api::router(state), store)
}
