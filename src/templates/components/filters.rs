use crate::params::PageParams;
use crate::view::ViewState;
use maud::{html, Markup};

const MIN_PRICES: [(&str, &str); 5] = [
    ("500000", "$500,000"),
    ("750000", "$750,000"),
    ("1000000", "$1,000,000"),
    ("1500000", "$1,500,000"),
    ("2000000", "$2,000,000"),
];

const MAX_PRICES: [(&str, &str); 5] = [
    ("1000000", "$1,000,000"),
    ("1500000", "$1,500,000"),
    ("2000000", "$2,000,000"),
    ("2500000", "$2,500,000"),
    ("3000000", "$3,000,000"),
];

const BEDROOMS: [(&str, &str); 4] = [("1", "1+"), ("2", "2+"), ("3", "3+"), ("4", "4+")];

fn select(name: &str, label: &str, any_label: &str, options: &[(&str, &str)], current: &str) -> Markup {
    // A value typed into the URL by hand still shows up as selected.
    let custom = !current.is_empty() && !options.iter().any(|(v, _)| *v == current);

    html! {
        div class="filter" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                option value="" selected[current.is_empty()] { (any_label) }
                @for (value, text) in options {
                    option value=(value) selected[*value == current] { (text) }
                }
                @if custom {
                    option value=(current) selected { (current) }
                }
            }
        }
    }
}

pub fn filter_panel(params: &PageParams, property_types: &[&str]) -> Markup {
    let criteria = &params.criteria;
    let types: Vec<(&str, &str)> = property_types.iter().map(|t| (*t, *t)).collect();

    html! {
        form method="get" action="/" class="filters" {
            h3 { "Filters" }
            @if !params.search.is_empty() {
                input type="hidden" name="q" value=(params.search);
            }
            div class="filter-grid" {
                (select("min_price", "Min Price", "Any", &MIN_PRICES, &criteria.min_price))
                (select("max_price", "Max Price", "Any", &MAX_PRICES, &criteria.max_price))
                (select("bedrooms", "Bedrooms", "Any", &BEDROOMS, &criteria.bedrooms))
                (select("property_type", "Property Type", "All Types", &types, &criteria.property_type))
            }
            button type="submit" class="btn" { "Apply" }
            @if !criteria.is_empty() {
                a class="reset" href=(params.cleared().with_view(ViewState::Idle).href()) { "Reset" }
            }
        }
    }
}
