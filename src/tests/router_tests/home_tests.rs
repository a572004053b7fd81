use crate::domain::ViewMode;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, listing_json, test_state, FakeGeocoder};

#[test]
fn home_page_lists_every_listing_cheapest_first() {
    let state = test_state(
        ViewMode::Agent,
        &[listing_json(1, 300), listing_json(2, 100), listing_json(3, 200)],
        FakeGeocoder::new(),
    );

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"id="search-bar""#));
    assert!(body.contains("Agent view"));

    let pos: Vec<usize> = ["$100", "$200", "$300"]
        .iter()
        .map(|p| body.find(p).unwrap())
        .collect();
    assert!(pos[0] < pos[1] && pos[1] < pos[2]);
    assert!(body.contains("Select a listing from the list on the left."));
}

#[test]
fn client_home_page_shows_only_requested_listings_without_prices() {
    let state = test_state(
        ViewMode::Client(vec![3, 1]),
        &[listing_json(1, 300), listing_json(2, 100), listing_json(3, 200)],
        FakeGeocoder::new(),
    );

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("Client view"));
    assert!(!body.contains("/listings/2\""));
    assert!(!body.contains("bath - $"));

    let three = body.find("/listings/3\"").unwrap();
    let one = body.find("/listings/1\"").unwrap();
    assert!(three < one);
}

#[test]
fn unknown_route_renders_not_found_page() {
    let state = test_state(ViewMode::Agent, &[], FakeGeocoder::new());

    let resp = respond(get("/admin"), &state);
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Error 404"));
}
