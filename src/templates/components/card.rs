use crate::domain::Listing;
use crate::templates::format::{format_price, group_thousands};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing, href: &str) -> Markup {
    html! {
        a class="listing-card" href=(href) data-listing-id=(listing.id) data-status=(listing.status.as_str()) {
            div class="listing-card-image" {
                @match listing.thumbnail() {
                    Some(src) => {
                        img src=(src) alt=(listing.title);
                    }
                    None => {
                        div class="image-placeholder" {}
                    }
                }
                span class="status-badge" { (listing.status.label()) }
            }
            div class="listing-card-body" {
                div class="listing-card-head" {
                    h3 { (listing.title) }
                    p class="price" { (format_price(listing.price)) }
                }
                p class="location" { (listing.city) ", " (listing.state) }
                ul class="stats" {
                    li { (listing.bedrooms) " Beds" }
                    li { (listing.bathrooms) " Baths" }
                    li { (group_thousands(listing.square_feet.into())) " sqft" }
                }
                p class="summary" { (listing.description) }
            }
        }
    }
}
