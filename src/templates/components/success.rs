use crate::templates::components::overlay;
use maud::{html, Markup};

pub fn success_message(close_href: &str) -> Markup {
    overlay(
        "success",
        close_href,
        html! {
            div class="text-center" {
                div class="success-icon" {
                    svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
                        polyline points="20 6 9 17 4 12" {}
                    }
                }
                h2 { "Thank You!" }
                p { "Your inquiry has been successfully submitted. We'll get back to you within 24 hours." }
                a class="btn primary" href=(close_href) { "Close" }
            }
        },
    )
}
