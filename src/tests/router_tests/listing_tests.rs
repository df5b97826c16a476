use std::sync::Arc;

use crate::tests::utils::{body_string, get, post_form, test_state, test_state_with, FailingListings};

#[test]
fn home_lists_every_house_with_guest_fallback() {
    let state = test_state();

    let body = body_string(get(&state, "/home"));
    assert!(body.contains("Guest"));
    assert!(body.contains("Baluwatar, Kathmandu"));
    assert!(body.contains("Lakeside, Pokhara"));
    assert!(body.contains("Jawalakhel, Lalitpur"));
}

#[test]
fn home_greets_the_signed_in_user() {
    let state = test_state();
    post_form(
        &state,
        "/signin",
        "email=test%40example.com&password=password",
    );

    let body = body_string(get(&state, "/home"));
    assert!(body.contains("John Doe"));
}

#[test]
fn search_filters_by_address_substring() {
    let state = test_state();

    let body = body_string(get(&state, "/home?q=lakeside"));
    assert!(body.contains("Lakeside, Pokhara"));
    assert!(!body.contains("Baluwatar, Kathmandu"));
}

#[test]
fn category_filters_by_equality() {
    let state = test_state();

    let body = body_string(get(&state, "/home?category=Villa"));
    assert!(body.contains("Jawalakhel, Lalitpur"));
    assert!(!body.contains("Lakeside, Pokhara"));
}

#[test]
fn no_matches_shows_the_empty_message() {
    let state = test_state();

    let body = body_string(get(&state, "/home?q=biratnagar"));
    assert!(body.contains("No properties found"));
}

#[test]
fn fetch_failure_offers_a_manual_retry() {
    let state = test_state_with(Arc::new(FailingListings));

    let resp = get(&state, "/home");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("An error occurred while fetching houses"));
    assert!(body.contains("Retry"));
}

#[test]
fn explore_shows_category_summaries() {
    let state = test_state();

    let body = body_string(get(&state, "/explore"));
    assert!(body.contains("Categories"));
    assert!(body.contains("House"));
    assert!(body.contains("Apartment"));
    assert!(body.contains("Villa"));
    assert!(body.contains("1 property"));
}

#[test]
fn explore_filters_like_home() {
    let state = test_state();

    let body = body_string(get(&state, "/explore?category=Apartment"));
    assert!(body.contains("Lakeside, Pokhara"));
    assert!(!body.contains("Jawalakhel, Lalitpur"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/nowhere")
        .body(astra::Body::empty())
        .unwrap();

    let res = crate::router::handle(req, &state);
    assert!(matches!(res, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();

    let resp = get(&state, "/static/main.css");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}
