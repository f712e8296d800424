// catalog.rs
use crate::domain::{fallback_catalog, Listing};
use crate::store::{ListingStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

impl CatalogOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogOrigin::Remote => "remote",
            CatalogOrigin::Fallback => "fallback",
        }
    }
}

/// The ordered listings known for this process. Never empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    origin: CatalogOrigin,
}

impl Catalog {
    pub fn fallback() -> Self {
        Self {
            listings: fallback_catalog(),
            origin: CatalogOrigin::Fallback,
        }
    }

    /// Remote rows are used as-is; an empty set means fallback.
    pub fn from_rows(rows: Vec<Listing>) -> Self {
        if rows.is_empty() {
            return Self::fallback();
        }
        Self {
            listings: rows,
            origin: CatalogOrigin::Remote,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Distinct property types in first-seen order.
    pub fn property_types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for listing in &self.listings {
            if !out.contains(&listing.property_type.as_str()) {
                out.push(&listing.property_type);
            }
        }
        out
    }
}

/// Fetch the for-sale listings once. Any failure or an empty result
/// yields the demo catalog; errors are logged, never returned.
pub fn load_catalog(store: &dyn ListingStore) -> Catalog {
    match store.fetch_for_sale() {
        Ok(rows) => {
            let catalog = Catalog::from_rows(rows);
            match catalog.origin() {
                CatalogOrigin::Remote => tracing::info!(
                    "Loaded {} listings from the remote store",
                    catalog.listings().len()
                ),
                CatalogOrigin::Fallback => {
                    tracing::warn!("Remote store returned no listings, using the demo catalog")
                }
            }
            catalog
        }
        Err(StoreError::Unavailable) => {
            tracing::debug!("Remote store unavailable, using the demo catalog");
            Catalog::fallback()
        }
        Err(e) => {
            tracing::error!("Error fetching properties: {e}");
            Catalog::fallback()
        }
    }
}
