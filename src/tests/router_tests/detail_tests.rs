use std::sync::Arc;

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, post_form, test_state, test_state_with, FailingListings,
};
use astra::Body;
use http::{Method, Request};

#[test]
fn detail_without_a_position_probes_the_browser() {
    let state = test_state();

    let body = body_string(get(&state, "/house/1"));
    assert!(body.contains("Baluwatar, Kathmandu"));
    assert!(body.contains("Rs. 25,000"));
    assert!(body.contains("Facilities"));
    assert!(body.contains("navigator.geolocation"));
    assert!(!body.contains("Unlock House"));
}

#[test]
fn nearby_position_shows_distance_and_unlock_button() {
    let state = test_state();

    let body = body_string(get(&state, "/house/1?lat=27.7175&lon=85.3242"));
    assert!(body.contains("Distance: "));
    assert!(body.contains("Unlock House"));
}

#[test]
fn faraway_position_keeps_the_house_locked() {
    let state = test_state();

    let body = body_string(get(&state, "/house/1?lat=27.8&lon=85.4"));
    assert!(body.contains("You are too far from the selected house."));
    assert!(!body.contains("Unlock House"));
}

#[test]
fn denied_permission_is_surfaced_and_locks_the_house() {
    let state = test_state();

    let body = body_string(get(&state, "/house/1?loc=denied"));
    assert!(body.contains("Location permission is required to unlock the house."));
    assert!(!body.contains("Unlock House"));
}

#[test]
fn unavailable_position_is_surfaced() {
    let state = test_state();

    let body = body_string(get(&state, "/house/1?loc=unavailable"));
    assert!(body.contains("Current position unavailable."));
    assert!(!body.contains("Unlock House"));
}

#[test]
fn listing_without_coordinates_never_unlocks() {
    let state = test_state();

    let body = body_string(get(&state, "/house/9?lat=27.7175&lon=85.3242"));
    assert!(body.contains("no location on file"));
    assert!(!body.contains("Unlock House"));
}

#[test]
fn unknown_house_is_not_found() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/house/404")
        .body(Body::empty())
        .unwrap();

    let res = handle(req, &state);
    assert!(matches!(res, Err(ServerError::NotFound)));
}

#[test]
fn unlock_succeeds_when_the_gate_passes() {
    let state = test_state();

    let resp = post_form(&state, "/house/1/unlock", "lat=27.7175&lon=85.3242");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("House unlocked"));
}

#[test]
fn unlock_recheck_rejects_a_faraway_position() {
    let state = test_state();

    let body = body_string(post_form(&state, "/house/1/unlock", "lat=27.8&lon=85.4"));
    assert!(body.contains("You are too far from the selected house."));
    assert!(!body.contains("House unlocked"));
}

#[test]
fn unlock_without_a_position_fails() {
    let state = test_state();

    let body = body_string(post_form(&state, "/house/1/unlock", ""));
    assert!(body.contains("Unlock failed"));
}

#[test]
fn unlock_fails_when_the_listing_fetch_fails() {
    let state = test_state_with(Arc::new(FailingListings));

    let body = body_string(post_form(&state, "/house/1/unlock", "lat=27.7175&lon=85.3242"));
    assert!(body.contains("Unlock failed"));
}

#[test]
fn detail_fetch_failure_is_a_network_error() {
    let state = test_state_with(Arc::new(FailingListings));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/house/1")
        .body(Body::empty())
        .unwrap();

    let res = handle(req, &state);
    assert!(matches!(res, Err(ServerError::Network(_))));
}
