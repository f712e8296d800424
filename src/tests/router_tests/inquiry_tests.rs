use crate::domain::inquiry::InquiryStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state, FakeStore};
use astra::Body;
use http::{Method, Request};
use url::form_urlencoded;

fn post_form(pairs: &[(&str, &str)]) -> Request<Body> {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }

    Request::builder()
        .method(Method::POST)
        .uri("/inquiries")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(ser.finish()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn location(resp: &astra::Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[test]
fn form_opened_from_a_listing_is_prefilled() {
    let (state, _) = test_state(FakeStore::with_listings(vec![]));

    let body = body_string(handle(get("/?view=inquiry&listing=2"), &state).unwrap());
    assert!(body.contains(r#"id="inquiry""#));
    assert!(body.contains("Inquiry about:"));
    assert!(body.contains("learning more about Charming Victorian Home."));
    assert!(body.contains(r#"name="listing_id" value="2""#));
    // the detail stays open underneath
    assert!(body.contains(r#"id="listing-detail""#));
}

#[test]
fn general_contact_form_has_no_listing() {
    let (state, _) = test_state(FakeStore::with_listings(vec![]));

    let body = body_string(handle(get("/?view=inquiry"), &state).unwrap());
    assert!(body.contains("Get In Touch"));
    assert!(!body.contains("Inquiry about:"));
    assert!(!body.contains(r#"name="listing_id""#));
    assert!(!body.contains(r#"id="listing-detail""#));
}

#[test]
fn missing_name_blocks_submission() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));

    let resp = handle(
        post_form(&[
            ("listing_id", "1"),
            ("name", "  "),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(store.insert_count(), 0, "store must not be called");

    let body = body_string(resp);
    assert!(body.contains("Please enter your name."));
    assert!(body.contains(r#"value="jane@example.com""#));
    assert!(body.contains(r#"id="inquiry""#));
}

#[test]
fn successful_submission_redirects_to_the_acknowledgment() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));

    let resp = handle(
        post_form(&[
            ("bedrooms", "3"),
            ("listing_id", "2"),
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("phone", ""),
            ("message", "Still available?"),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?bedrooms=3&view=success");

    let inserted = store.inserted.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].property_id.as_deref(), Some("2"));
    assert_eq!(inserted[0].name, "Jane Doe");
    assert_eq!(inserted[0].phone, None);
    assert_eq!(inserted[0].status, InquiryStatus::New);
}

#[test]
fn general_inquiry_is_stored_without_a_listing() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));

    let resp = handle(
        post_form(&[
            ("name", "Sam"),
            ("email", "sam@example.com"),
            ("phone", "555-0100"),
            ("message", "Looking for a condo"),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(location(&resp), "/?view=success");
    let inserted = store.inserted.lock().unwrap();
    assert_eq!(inserted[0].property_id, None);
    assert_eq!(inserted[0].phone.as_deref(), Some("555-0100"));
}

#[test]
fn store_failure_keeps_the_form_open_with_input() {
    let (state, store) = test_state(FakeStore::failing());

    let resp = handle(
        post_form(&[
            ("listing_id", "4"),
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("message", "Can I visit on Sunday?"),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(store.insert_count(), 0);

    let body = body_string(resp);
    assert!(body.contains("Failed to submit inquiry. Please try again."));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(body.contains("Can I visit on Sunday?"));
    assert!(body.contains(r#"id="inquiry""#));
    assert!(body.contains(r#"id="listing-detail""#));
    assert!(!body.contains("Thank You!"));
}

#[test]
fn success_view_closes_back_to_the_catalog() {
    let (state, _) = test_state(FakeStore::with_listings(vec![]));

    let body = body_string(handle(get("/?bedrooms=3&view=success"), &state).unwrap());
    assert!(body.contains("Thank You!"));
    assert!(!body.contains(r#"id="inquiry""#));
    assert!(!body.contains(r#"id="listing-detail""#));
    assert!(body.contains(r#"href="/?bedrooms=3""#));
}

#[test]
fn select_request_submit_flow() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));

    // catalog -> detail
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains(r#"href="/?view=detail&amp;listing=5""#));

    // detail -> inquiry
    let body = body_string(handle(get("/?view=detail&listing=5"), &state).unwrap());
    assert!(body.contains(r#"href="/?view=inquiry&amp;listing=5""#));

    // inquiry -> submit
    let resp = handle(
        post_form(&[
            ("listing_id", "5"),
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", "I'm interested in learning more about Contemporary Mountain View Home."),
        ]),
        &state,
    )
    .unwrap();
    assert_eq!(location(&resp), "/?view=success");
    assert_eq!(store.insert_count(), 1);

    // success page: no detail, no form
    let body = body_string(handle(get(&location(&resp)), &state).unwrap());
    assert!(body.contains("Thank You!"));
    assert!(!body.contains(r#"id="listing-detail""#));
    assert!(!body.contains(r#"id="inquiry""#));
}

#[test]
fn oversized_form_is_rejected_not_truncated() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));
    let message = format!("{}END", "a".repeat(70 * 1024));

    let result = handle(
        post_form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", &message),
        ]),
        &state,
    );

    match result {
        Err(ServerError::BadRequest(msg)) => assert_eq!(msg, "form body too large"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(resp) => panic!("expected rejection, got {}", resp.status()),
    }
    assert_eq!(store.insert_count(), 0);
}

#[test]
fn form_just_under_the_limit_is_accepted() {
    let (state, store) = test_state(FakeStore::with_listings(vec![]));
    let message = format!("{}END", "a".repeat(60 * 1024));

    let resp = handle(
        post_form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", &message),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(location(&resp), "/?view=success");
    let stored = store.inserted.lock().unwrap();
    assert!(stored[0].message.ends_with("END"));
}
