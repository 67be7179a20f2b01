use fra_core::DatasetStore;

/// Shared, read-only state behind every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: DatasetStore,
}

impl AppState {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }
}
