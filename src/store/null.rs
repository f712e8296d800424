use crate::domain::{Listing, NewInquiry};
use crate::store::{ListingStore, StoreError};

/// Stand-in used when no credentials are configured.
pub struct NullStore;

impl ListingStore for NullStore {
    fn fetch_for_sale(&self) -> Result<Vec<Listing>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn insert_inquiry(&self, _inquiry: &NewInquiry) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
