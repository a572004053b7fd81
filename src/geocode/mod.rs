mod cache;
mod geocode_error;
mod google;
mod models;

pub use cache::CachedGeocoder;
pub use geocode_error::GeocodeError;
pub use google::{GeocodeRegion, GoogleGeocoder};
pub use models::GeocodeResult;

/// Turns a free-text address into candidate places.
///
/// Implementations must fail with [`GeocodeError::NoResults`] rather than
/// return an empty list.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GeocodeError>;
}
