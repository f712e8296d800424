// templates/pages/home.rs

use crate::domain::Listing;
use crate::params::PageParams;
use crate::templates::{
    components::{
        filter_panel, hero, inquiry_form, listing_card, listing_detail, success_message,
        InquiryVm,
    },
    desktop_layout,
};
use crate::view::{ViewAction, ViewState};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub params: &'a PageParams,
    pub listings: Vec<&'a Listing>,
    pub property_types: Vec<&'a str>,
    pub selected: Option<&'a Listing>,
    pub inquiry: Option<InquiryVm<'a>>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let params = vm.params;
    let href_after = |action: ViewAction| params.with_view(params.view.clone().apply(action)).href();

    desktop_layout(
        "Featured Properties",
        &href_after(ViewAction::OpenContact),
        html! {
            (hero(params))

            main class="container" id="properties" {
                div class="section-head" {
                    h2 { "Featured Properties" }
                    p { "Discover your perfect home from our exclusive collection" }
                }

                (filter_panel(params, &vm.property_types))

                @if vm.listings.is_empty() {
                    div class="empty-results" {
                        p { "No properties found matching your criteria." }
                        a href=(params.cleared().with_view(ViewState::Idle).href()) { "Clear filters" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in &vm.listings {
                            (listing_card(listing, &params.with_view(ViewState::Detail { listing: listing.id.clone() }).href()))
                        }
                    }
                }

                section id="about" class="about" {
                    h2 { "About Premier Estates" }
                    p {
                        "With over 20 years of experience in luxury real estate, Premier Estates has established "
                        "itself as the premier choice for discerning buyers and sellers."
                    }
                    p {
                        "We specialize in connecting clients with their dream properties, offering personalized "
                        "guidance through every step of the real estate journey."
                    }
                }
            }

            @if let Some(listing) = vm.selected {
                (listing_detail(
                    listing,
                    &href_after(ViewAction::CloseDetail),
                    &href_after(ViewAction::RequestInfo),
                ))
            }

            @if let Some(inquiry) = &vm.inquiry {
                (inquiry_form(inquiry, params, &href_after(ViewAction::CloseInquiry)))
            }

            @if params.view.success_open() {
                (success_message(&href_after(ViewAction::CloseSuccess)))
            }
        },
    )
}
