use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is immutable after startup, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
