mod null;
mod rest;
mod store_error;

pub use null::NullStore;
pub use rest::RestStore;
pub use store_error::StoreError;

use crate::config::{StoreCredentials, StoreDisabled};
use crate::domain::{Listing, NewInquiry};

/// The hosted data service holding listings and inquiries.
pub trait ListingStore: Send + Sync {
    /// Listings with status `for_sale`, newest first.
    fn fetch_for_sale(&self) -> Result<Vec<Listing>, StoreError>;

    fn insert_inquiry(&self, inquiry: &NewInquiry) -> Result<(), StoreError>;
}

/// Pick the store once at startup: live when credentials are present,
/// otherwise the null store.
pub fn connect(credentials: Result<&StoreCredentials, &StoreDisabled>) -> Box<dyn ListingStore> {
    match credentials {
        Ok(creds) => match RestStore::new(creds) {
            Ok(store) => {
                tracing::info!("Using remote listing store at {}", creds.url);
                Box::new(store)
            }
            Err(e) => {
                tracing::error!("Remote store client could not be built: {e}");
                Box::new(NullStore)
            }
        },
        Err(reason) => {
            tracing::warn!("Remote store disabled ({reason}), serving the demo catalog");
            Box::new(NullStore)
        }
    }
}
