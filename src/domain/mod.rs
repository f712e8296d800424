pub mod fallback;
pub mod filter;
pub mod inquiry;
pub mod listing;

pub use fallback::fallback_catalog;
pub use filter::{apply_filters, FilterCriteria};
pub use inquiry::{InquiryForm, NewInquiry};
pub use listing::Listing;
