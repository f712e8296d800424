// src/domain/listing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    ForSale,
    Sold,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for_sale",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
        }
    }

    /// Badge text shown on the listing card.
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
        }
    }
}

/// One property record as stored in the `properties` table.
/// Read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,

    // Address
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub country: Option<String>,

    // Details
    pub bedrooms: u32,
    pub bathrooms: f64, // may be fractional, e.g. 2.5
    pub square_feet: u32,
    pub year_built: i32,
    pub property_type: String,
    pub status: ListingStatus,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// First image, used as the card thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// "123 Main Street, San Francisco, CA 94102"
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}
