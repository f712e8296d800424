use crate::domain::Listing;
use crate::templates::components::overlay;
use crate::templates::format::{format_price, group_thousands};
use maud::{html, Markup};

pub fn listing_detail(listing: &Listing, close_href: &str, inquire_href: &str) -> Markup {
    overlay(
        "listing-detail",
        close_href,
        html! {
            h2 { (listing.title) }

            div class="gallery" {
                @for (i, src) in listing.images.iter().enumerate() {
                    img src=(src) alt={ (listing.title) " photo " (i + 1) };
                }
            }

            div class="detail-head" {
                div {
                    div class="price" { (format_price(listing.price)) }
                    div class="location" { (listing.full_address()) }
                }
                a class="btn primary" href=(inquire_href) { "Request Information" }
            }

            dl class="detail-stats" {
                div { dt { "Bedrooms" } dd { (listing.bedrooms) } }
                div { dt { "Bathrooms" } dd { (listing.bathrooms) } }
                div { dt { "Sq Ft" } dd { (group_thousands(listing.square_feet.into())) } }
                div { dt { "Year Built" } dd { (listing.year_built) } }
            }

            h3 { "Description" }
            p { (listing.description) }

            @if !listing.features.is_empty() {
                h3 { "Features & Amenities" }
                ul class="features" {
                    @for feature in &listing.features {
                        li { (feature) }
                    }
                }
            }
        },
    )
}
