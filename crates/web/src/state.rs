use std::sync::Arc;

use storage::store::EntityStore;

/// Shared application state, built once in `main` and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }
}
