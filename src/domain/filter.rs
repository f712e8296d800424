// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Structured constraints as they arrive from the filter form.
/// Every field is raw text; blank means "no restriction".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub property_type: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        [
            &self.min_price,
            &self.max_price,
            &self.bedrooms,
            &self.property_type,
        ]
        .iter()
        .all(|v| v.trim().is_empty())
    }

    /// Parsed number, or `None` when blank or unparsable.
    /// An unparsable value disables only its own constraint.
    fn parsed_price(raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn parsed_bedrooms(&self) -> Option<u32> {
        let raw = self.bedrooms.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<u32>().ok()
    }

    fn property_type(&self) -> Option<&str> {
        Some(self.property_type.as_str()).filter(|t| !t.trim().is_empty())
    }
}

/// Case-insensitive substring match over city, state, title and property type.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [
        &listing.city,
        &listing.state,
        &listing.title,
        &listing.property_type,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if let Some(min) = FilterCriteria::parsed_price(&criteria.min_price) {
        if listing.price < min {
            return false;
        }
    }
    if let Some(max) = FilterCriteria::parsed_price(&criteria.max_price) {
        if listing.price > max {
            return false;
        }
    }
    if let Some(beds) = criteria.parsed_bedrooms() {
        if listing.bedrooms < beds {
            return false;
        }
    }
    if let Some(kind) = criteria.property_type() {
        if listing.property_type != kind {
            return false;
        }
    }
    true
}

/// Stable filter: the listings satisfying every active constraint,
/// in catalog order.
pub fn apply_filters<'a>(
    catalog: &'a [Listing],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Listing> {
    catalog
        .iter()
        .filter(|l| matches_query(l, query) && matches_criteria(l, criteria))
        .collect()
}
