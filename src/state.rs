use crate::catalog::Catalog;
use crate::store::ListingStore;

/// Shared by every worker thread; read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub store: Box<dyn ListingStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Box<dyn ListingStore>) -> Self {
        Self { catalog, store }
    }
}
