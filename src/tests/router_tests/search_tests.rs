use crate::domain::ViewMode;
use crate::router::respond;
use crate::tests::utils::{area, body_string, htmx_get, listing_json, test_state, FakeGeocoder};
use serde_json::Value;

fn located(id: u64, price: i64, lat: f64, lng: f64) -> Value {
    let mut record = listing_json(id, price);
    record["latitude"] = lat.into();
    record["longitude"] = lng.into();
    record
}

#[test]
fn numeric_filters_narrow_results_and_reset_detail() {
    let state = test_state(
        ViewMode::Agent,
        &[listing_json(1, 1500), listing_json(2, 2500), listing_json(3, 3500)],
        FakeGeocoder::new(),
    );

    let resp = respond(htmx_get("/search?location=&rent-min=2000&rent-max=&beds=&baths=1"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("/listings/1\""));
    assert!(body.contains("/listings/2\""));
    assert!(body.contains("/listings/3\""));
    assert!(body.contains(r#"<div id="selected-result" hx-swap-oob="true">"#));
}

#[test]
fn location_search_uses_geocoded_area_and_caches_lookup() {
    let geocoder = FakeGeocoder::new().with(
        "Upper West Side",
        vec![area(40.77, -73.99, 40.81, -73.95)],
    );
    let calls = geocoder.counter();
    let state = test_state(
        ViewMode::Agent,
        &[
            located(1, 2000, 40.79, -73.97),
            located(2, 2000, 40.70, -74.01),
            located(3, 2000, 41.79, -73.97),
        ],
        geocoder,
    );

    let uri = "/search?location=Upper+West+Side&rent-min=&rent-max=&beds=&baths=";
    let first = body_string(respond(htmx_get(uri), &state));
    let second = body_string(respond(htmx_get(uri), &state));

    for body in [&first, &second] {
        assert!(body.contains("/listings/1\""));
        assert!(!body.contains("/listings/2\""));
        assert!(!body.contains("/listings/3\""));
    }
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn failed_geocode_is_reported_not_swallowed() {
    let state = test_state(ViewMode::Agent, &[listing_json(1, 2000)], FakeGeocoder::new());

    let resp = respond(htmx_get("/search?location=Atlantis"), &state);
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains(r#"class="error""#));
    assert!(body.contains("No geocoding results for &quot;Atlantis&quot;"));
    assert!(!body.contains("results-list"));
}

#[test]
fn client_search_keeps_requested_order() {
    let state = test_state(
        ViewMode::Client(vec![3, 1, 2]),
        &[listing_json(1, 100), listing_json(2, 200), listing_json(3, 300)],
        FakeGeocoder::new(),
    );

    let body = body_string(respond(htmx_get("/search?beds=1"), &state));

    let pos: Vec<usize> = [3, 1, 2]
        .iter()
        .map(|id| body.find(&format!("/listings/{id}\"")).unwrap())
        .collect();
    assert!(pos[0] < pos[1] && pos[1] < pos[2]);
}
