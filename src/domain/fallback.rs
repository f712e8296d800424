// src/domain/fallback.rs

use crate::domain::listing::{Listing, ListingStatus};
use chrono::{DateTime, TimeZone, Utc};

struct Seed {
    id: &'static str,
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    price: f64,
    address: &'static str,
    city: &'static str,
    zip_code: &'static str,
    bedrooms: u32,
    bathrooms: f64,
    square_feet: u32,
    year_built: i32,
    property_type: &'static str,
    features: [&'static str; 6],
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "1",
        slug: "modern-downtown-loft",
        title: "Modern Downtown Loft",
        description: "Stunning modern loft in the heart of downtown with floor-to-ceiling windows and breathtaking city views. Features an open floor plan, gourmet kitchen with stainless steel appliances, hardwood floors throughout, and luxury finishes.",
        price: 875000.0,
        address: "123 Main Street",
        city: "San Francisco",
        zip_code: "94102",
        bedrooms: 2,
        bathrooms: 2.0,
        square_feet: 1500,
        year_built: 2020,
        property_type: "Condo",
        features: [
            "City Views",
            "Hardwood Floors",
            "Stainless Steel Appliances",
            "Open Floor Plan",
            "Parking Included",
            "Gym Access",
        ],
    },
    Seed {
        id: "2",
        slug: "charming-victorian-home",
        title: "Charming Victorian Home",
        description: "Beautifully restored Victorian home with original architectural details. Spacious rooms, updated kitchen and bathrooms, large backyard perfect for entertaining. Walking distance to parks, shops, and restaurants.",
        price: 1250000.0,
        address: "456 Oak Avenue",
        city: "San Francisco",
        zip_code: "94110",
        bedrooms: 4,
        bathrooms: 3.0,
        square_feet: 2800,
        year_built: 1905,
        property_type: "Single Family",
        features: [
            "Updated Kitchen",
            "Original Details",
            "Large Backyard",
            "Hardwood Floors",
            "Bay Windows",
            "Close to Transit",
        ],
    },
    Seed {
        id: "3",
        slug: "luxury-beachfront-condo",
        title: "Luxury Beachfront Condo",
        description: "Spectacular oceanfront condo with panoramic views of the Pacific. This luxury unit features high-end finishes, spa-like bathrooms, chef's kitchen, and private balcony. Resort-style amenities including pool, spa, and fitness center.",
        price: 2100000.0,
        address: "789 Ocean Drive",
        city: "Santa Monica",
        zip_code: "90401",
        bedrooms: 3,
        bathrooms: 3.0,
        square_feet: 2200,
        year_built: 2018,
        property_type: "Condo",
        features: [
            "Ocean Views",
            "Private Balcony",
            "Pool",
            "Spa",
            "Fitness Center",
            "24/7 Security",
        ],
    },
    Seed {
        id: "4",
        slug: "cozy-suburban-retreat",
        title: "Cozy Suburban Retreat",
        description: "Perfect family home in a quiet neighborhood with excellent schools. Updated throughout with new paint, flooring, and modern fixtures. Large fenced yard, two-car garage, and plenty of storage space.",
        price: 685000.0,
        address: "321 Maple Lane",
        city: "San Jose",
        zip_code: "95123",
        bedrooms: 3,
        bathrooms: 2.5,
        square_feet: 2000,
        year_built: 1998,
        property_type: "Single Family",
        features: [
            "Fenced Yard",
            "Two Car Garage",
            "Updated Interior",
            "Good Schools",
            "Quiet Neighborhood",
            "Storage Space",
        ],
    },
    Seed {
        id: "5",
        slug: "contemporary-mountain-view-home",
        title: "Contemporary Mountain View Home",
        description: "Stunning contemporary home with breathtaking mountain views. Open concept design with walls of glass, chef's kitchen, master suite with spa bathroom, and outdoor living space with infinity pool.",
        price: 1850000.0,
        address: "654 Ridge Road",
        city: "Los Altos",
        zip_code: "94022",
        bedrooms: 4,
        bathrooms: 4.5,
        square_feet: 3500,
        year_built: 2019,
        property_type: "Single Family",
        features: [
            "Mountain Views",
            "Infinity Pool",
            "Open Concept",
            "Spa Bathroom",
            "Chef Kitchen",
            "Smart Home",
        ],
    },
    Seed {
        id: "6",
        slug: "historic-craftsman-bungalow",
        title: "Historic Craftsman Bungalow",
        description: "Charming craftsman bungalow with authentic period details. Features include built-in cabinets, original woodwork, coved ceilings, and cozy fireplace. Updated systems while maintaining historic character.",
        price: 925000.0,
        address: "987 Pine Street",
        city: "Pasadena",
        zip_code: "91101",
        bedrooms: 3,
        bathrooms: 2.0,
        square_feet: 1800,
        year_built: 1922,
        property_type: "Single Family",
        features: [
            "Historic Character",
            "Fireplace",
            "Built-ins",
            "Original Woodwork",
            "Updated Systems",
            "Covered Porch",
        ],
    },
];

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The fixed demo catalog served whenever the remote store gives us nothing.
/// Always six listings, always in this order.
pub fn fallback_catalog() -> Vec<Listing> {
    let stamp = seeded_at();

    SEEDS
        .iter()
        .map(|s| Listing {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            price: s.price,
            address: s.address.to_string(),
            city: s.city.to_string(),
            state: "CA".to_string(),
            zip_code: s.zip_code.to_string(),
            country: Some("USA".to_string()),
            bedrooms: s.bedrooms,
            bathrooms: s.bathrooms,
            square_feet: s.square_feet,
            year_built: s.year_built,
            property_type: s.property_type.to_string(),
            status: ListingStatus::ForSale,
            images: (1..=3)
                .map(|n| format!("/images/{}-{n}.jpg", s.slug))
                .collect(),
            features: s.features.iter().map(|f| f.to_string()).collect(),
            created_at: stamp,
            updated_at: stamp,
        })
        .collect()
}
