use crate::dataset::{DatasetLoader, DatasetSource};
use crate::domain::{Bounds, LatLng, Listing, ViewMode};
use crate::geocode::{CachedGeocoder, GeocodeError, GeocodeResult, Geocoder};
use crate::state::{AppState, PageSettings};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Raw dataset record: 2 bed / 1 bath at 40.75, -73.98.
pub fn listing_json(id: u64, price: i64) -> Value {
    json!({
        "zpid": id,
        "address": { "streetAddress": format!("{id} Test Ave"), "city": "New York", "state": "NY", "zipcode": "10001" },
        "zipcode": "10001",
        "bedrooms": 2,
        "bathrooms": 1,
        "price": price,
        "latitude": 40.75,
        "longitude": -73.98,
        "photos": [ { "mixedSources": { "jpeg": [ { "url": format!("https://photos.example.com/{id}.jpg"), "width": 384 } ] } } ],
        "description": "A test apartment.",
        "property": [],
        "schools": []
    })
}

pub fn listing(id: u64, price: i64) -> Listing {
    serde_json::from_value(listing_json(id, price)).unwrap()
}

pub fn listing_at(id: u64, lat: f64, lng: f64) -> Listing {
    let mut l = listing(id, 2000);
    l.latitude = lat;
    l.longitude = lng;
    l
}

/// A fully populated listing for rendering tests.
pub fn sample_listing() -> Listing {
    serde_json::from_value(json!({
        "zpid": 2077,
        "address": { "streetAddress": "12 W 4th St", "city": "New York", "state": "NY", "zipcode": "10012" },
        "zipcode": "10012",
        "bedrooms": 2,
        "bathrooms": 1,
        "price": 4200,
        "latitude": 40.7295,
        "longitude": -73.9965,
        "photos": [
            { "mixedSources": { "jpeg": [
                { "url": "https://photos.example.com/a-192.jpg", "width": 192 },
                { "url": "https://photos.example.com/a-1536.jpg", "width": 1536 },
                { "url": "https://photos.example.com/a-768.jpg", "width": 768 }
            ] } },
            { "mixedSources": { "jpeg": [
                { "url": "https://photos.example.com/b-384.jpg", "width": 384 },
                { "url": "https://photos.example.com/b-384-dup.jpg", "width": 384 }
            ] } }
        ],
        "description": "Sunny walk-up near Washington Square.",
        "property": [ { "title": "Heating", "values": ["Radiator", "Steam"] } ],
        "schools": [ {
            "name": "PS 41", "link": "https://example.com/ps41", "level": "Elementary",
            "type": "Public", "rating": 8, "distance": 0.3, "grades": "PK-5"
        } ]
    }))
    .unwrap()
}

/// Writes records to a temp file that is deleted when the handle drops.
pub fn write_dataset(records: &[Value]) -> NamedTempFile {
    write_raw_dataset(&Value::Array(records.to_vec()).to_string())
}

pub fn write_raw_dataset(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("listings_test_")
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Approximate result covering the given south/west/north/east box.
pub fn area(south: f64, west: f64, north: f64, east: f64) -> GeocodeResult {
    GeocodeResult::Approximate {
        formatted_address: "test area".into(),
        bounds: Bounds::new(LatLng::new(south, west), LatLng::new(north, east)),
    }
}

pub fn point(lat: f64, lng: f64) -> GeocodeResult {
    GeocodeResult::Exact {
        formatted_address: "test point".into(),
        location: LatLng::new(lat, lng),
    }
}

/// In-memory geocoder that counts how often it is asked.
pub struct FakeGeocoder {
    answers: HashMap<String, Vec<GeocodeResult>>,
    calls: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with(mut self, address: &str, results: Vec<GeocodeResult>) -> Self {
        self.answers.insert(address.to_string(), results);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared handle to the call count, usable after the geocoder is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(address)
            .cloned()
            .ok_or_else(|| GeocodeError::NoResults(address.to_string()))
    }
}

/// App state over a temp-file dataset, with the fake behind the real cache.
pub fn test_state(mode: ViewMode, records: &[Value], geocoder: FakeGeocoder) -> AppState {
    let file = write_dataset(records);
    let dataset = DatasetLoader::new(DatasetSource::File(file.path().to_path_buf()), mode);
    // Loaded here so the temp file can be removed when `file` drops.
    dataset.load().unwrap();

    AppState::new(
        dataset,
        Box::new(CachedGeocoder::new(geocoder)),
        PageSettings {
            maps_api_key: "test-key".into(),
            map_id: "DEMO_MAP_ID".into(),
        },
    )
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn htmx_get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
