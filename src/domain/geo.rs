// src/domain/geo.rs

use serde::Deserialize;

/// Tolerance, in degrees, for treating two points as the same place.
pub const NEAR_EPSILON: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are within `epsilon` of `other`.
    pub fn is_near(&self, other: &LatLng, epsilon: f64) -> bool {
        (self.lat - other.lat).abs() < epsilon && (self.lng - other.lng).abs() < epsilon
    }
}

/// A rectangular region given by its south-west and north-east corners.
///
/// When `southwest.lng > northeast.lng` the region crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

impl Bounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            northeast,
            southwest,
        }
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        let in_lat = self.southwest.lat <= point.lat && point.lat <= self.northeast.lat;

        let (west, east) = (self.southwest.lng, self.northeast.lng);
        let in_lng = if west <= east {
            west <= point.lng && point.lng <= east
        } else {
            point.lng >= west || point.lng <= east
        };

        in_lat && in_lng
    }
}
