use crate::domain::ViewMode;
use crate::router::respond;
use crate::tests::utils::{body_string, get, htmx_get, listing_json, test_state, FakeGeocoder};

#[test]
fn detail_panel_renders_selected_listing() {
    let state = test_state(
        ViewMode::Agent,
        &[listing_json(7, 2500), listing_json(8, 2600)],
        FakeGeocoder::new(),
    );

    let resp = respond(htmx_get("/listings/7"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"<div id="selected-result">"#));
    assert!(body.contains("<h2>Listing ID: 7</h2>"));
    assert!(body.contains("2 bed/1 bath - $2500"));
    assert!(body.contains(r#"<gmp-map center="40.75, -73.98""#));
    assert!(body.contains("Nearby Schools"));

    // Partial only, for swapping into the page.
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn client_cannot_open_listing_outside_their_set() {
    let state = test_state(
        ViewMode::Client(vec![7]),
        &[listing_json(7, 2500), listing_json(8, 2600)],
        FakeGeocoder::new(),
    );

    let allowed = body_string(respond(htmx_get("/listings/7"), &state));
    assert!(allowed.contains("<h2>2 bed/1 bath</h2>"));

    let resp = respond(htmx_get("/listings/8"), &state);
    assert_eq!(resp.status(), 404);
}

#[test]
fn malformed_listing_id_is_bad_request() {
    let state = test_state(ViewMode::Agent, &[listing_json(7, 2500)], FakeGeocoder::new());

    let resp = respond(get("/listings/seven"), &state);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Invalid listing id: seven"));
}
