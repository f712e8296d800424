use crate::errors::ServerError;
use crate::router::{handle, MAIN_CSS};
use crate::tests::utils::{body_string, listing, test_state, FakeStore};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn card_ids(body: &str) -> Vec<String> {
    body.split("data-listing-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn home_page_shows_the_fallback_catalog_when_the_store_fails() {
    let (state, _) = test_state(FakeStore::failing());

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured Properties"));
    assert_eq!(card_ids(&body), ["1", "2", "3", "4", "5", "6"]);
    assert!(body.contains("$875,000"));
}

#[test]
fn remote_rows_are_rendered_in_store_order() {
    let rows = vec![listing("z9", 500000.0), listing("a1", 400000.0)];
    let (state, _) = test_state(FakeStore::with_listings(rows));

    let body = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(card_ids(&body), ["z9", "a1"]);
}

#[test]
fn min_price_filter_drops_cheaper_listings() {
    let rows = vec![
        listing("a", 875000.0),
        listing("b", 1250000.0),
        listing("c", 2100000.0),
    ];
    let (state, _) = test_state(FakeStore::with_listings(rows));

    let body = body_string(handle(get("/?min_price=1000000"), &state).unwrap());
    assert_eq!(card_ids(&body), ["b", "c"]);
}

#[test]
fn search_is_case_insensitive() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?q=SAN+FRANCISCO"), &state).unwrap());
    assert_eq!(card_ids(&body), ["1", "2"]);

    let body = body_string(handle(get("/?q=san%20francisco"), &state).unwrap());
    assert_eq!(card_ids(&body), ["1", "2"]);
}

#[test]
fn malformed_number_is_ignored() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?min_price=cheap&bedrooms=4"), &state).unwrap());
    assert_eq!(card_ids(&body), ["2", "5"]);
}

#[test]
fn no_matches_offers_to_clear_filters() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?bedrooms=9&q=loft"), &state).unwrap());
    assert!(card_ids(&body).is_empty());
    assert!(body.contains("No properties found matching your criteria."));
    assert!(body.contains("Clear filters"));
}

#[test]
fn selecting_a_listing_opens_its_detail() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?view=detail&listing=3"), &state).unwrap());
    assert!(body.contains(r#"id="listing-detail""#));
    assert!(body.contains("Ocean Views"));
    assert!(body.contains("789 Ocean Drive, Santa Monica, CA 90401"));
    // request info keeps the listing, close goes back to the bare catalog
    assert!(body.contains(r#"href="/?view=inquiry&amp;listing=3""#));
    assert!(body.contains(r#"class="overlay-close" href="/""#));
}

#[test]
fn unknown_listing_opens_nothing() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?view=detail&listing=404"), &state).unwrap());
    assert!(!body.contains(r#"id="listing-detail""#));
    assert_eq!(card_ids(&body).len(), 6);
}

#[test]
fn filters_survive_opening_a_listing() {
    let (state, _) = test_state(FakeStore::failing());

    let body = body_string(handle(get("/?property_type=Condo"), &state).unwrap());
    assert_eq!(card_ids(&body), ["1", "3"]);
    assert!(body.contains(r#"href="/?property_type=Condo&amp;view=detail&amp;listing=3""#));
}

#[test]
fn json_endpoint_applies_the_same_filters() {
    let (state, _) = test_state(FakeStore::failing());

    let resp = handle(get("/api/listings?property_type=Condo"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn health_reports_catalog_origin() {
    let (state, _) = test_state(FakeStore::failing());
    let body = body_string(handle(get("/health"), &state).unwrap());
    assert_eq!(body, "ok (fallback catalog)");
}

#[test]
fn unknown_route_is_not_found() {
    let (state, _) = test_state(FakeStore::failing());
    assert!(matches!(
        handle(get("/admin"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served() {
    let (state, _) = test_state(FakeStore::failing());
    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".overlay"));
}

fn class_names(body: &str) -> Vec<String> {
    body.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .flat_map(|classes| classes.split_whitespace().map(str::to_string))
        .collect()
}

fn stylesheet_defines(class: &str) -> bool {
    let selector = format!(".{class}");
    MAIN_CSS.match_indices(&selector).any(|(at, _)| {
        MAIN_CSS[at + selector.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    })
}

#[test]
fn every_rendered_class_is_styled() {
    let mut bare = listing("bare", 500000.0);
    bare.images.clear();
    let (state, _) = test_state(FakeStore::with_listings(vec![bare, listing("2", 900000.0)]));

    let pages = [
        "/?bedrooms=2",
        "/?q=nowhere",
        "/?view=detail&listing=2",
        "/?view=inquiry&listing=2",
        "/?view=success",
    ];
    for uri in pages {
        let body = body_string(handle(get(uri), &state).unwrap());
        for class in class_names(&body) {
            assert!(stylesheet_defines(&class), "{uri}: class `{class}` has no rule");
        }
    }
}
