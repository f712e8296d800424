use maud::{html, Markup};

pub mod card;
pub mod detail;
pub mod filters;
pub mod hero;
pub mod inquiry_form;
pub mod success;

pub use card::listing_card;
pub use detail::listing_detail;
pub use filters::filter_panel;
pub use hero::hero;
pub use inquiry_form::{inquiry_form, InquiryVm};
pub use success::success_message;

/// Modal shell with a close link in the corner.
pub fn overlay(id: &str, close_href: &str, body: Markup) -> Markup {
    html! {
        div class="overlay" id=(id) {
            div class="overlay-panel" {
                a class="overlay-close" href=(close_href) aria-label="Close" { "×" }
                (body)
            }
        }
    }
}
