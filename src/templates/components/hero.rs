use crate::params::PageParams;
use maud::{html, Markup};

/// Search box. Active filters ride along as hidden fields
/// so searching never resets them.
pub fn hero(params: &PageParams) -> Markup {
    html! {
        section class="hero" {
            h1 { "Find Your Dream Home" }
            p { "Discover exceptional properties in the most desirable locations" }
            form method="get" action="/" class="hero-search" {
                @for (name, value) in params.filter_pairs() {
                    @if name != "q" {
                        input type="hidden" name=(name) value=(value);
                    }
                }
                input
                    type="search"
                    name="q"
                    value=(params.search)
                    placeholder="Search by city, state, or property type..."
                    aria-label="Search";
                button type="submit" class="primary" { "Search" }
            }
        }
    }
}
