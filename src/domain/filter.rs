// src/domain/filter.rs

use crate::domain::listing::Listing;
use crate::geocode::GeocodeResult;

pub const LOCATION_FIELD: &str = "location";
pub const RENT_MIN_FIELD: &str = "rent-min";
pub const RENT_MAX_FIELD: &str = "rent-max";
pub const BATHS_FIELD: &str = "baths";
pub const BEDS_FIELD: &str = "beds";

/// A snapshot of the search form. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: String,
    pub min_rent: Option<f64>,
    pub max_rent: Option<f64>,
    pub min_baths: Option<f64>,
    pub min_beds: Option<f64>,
}

impl FilterCriteria {
    /// Reads the form fields from decoded query pairs. Empty, unparseable and
    /// non-finite numbers are treated as unset.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = FilterCriteria::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                LOCATION_FIELD => criteria.location = value.to_string(),
                RENT_MIN_FIELD => criteria.min_rent = parse_number(value),
                RENT_MAX_FIELD => criteria.max_rent = parse_number(value),
                BATHS_FIELD => criteria.min_baths = parse_number(value),
                BEDS_FIELD => criteria.min_beds = parse_number(value),
                _ => {}
            }
        }

        criteria
    }

    /// Location text with surrounding whitespace removed, if any is left.
    pub fn location_query(&self) -> Option<&str> {
        let trimmed = self.location.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Evaluates one listing. `places` are the geocode results for the
    /// location text and are ignored when no location was entered.
    pub fn matches(&self, listing: &Listing, places: &[GeocodeResult]) -> bool {
        if self.location_query().is_some() {
            let point = listing.coordinates();
            if !places.iter().any(|place| place.contains(&point)) {
                return false;
            }
        }

        // An unknown price never fails a rent bound.
        if let Some(price) = listing.price.map(|p| p as f64) {
            if self.min_rent.is_some_and(|min| min > price) {
                return false;
            }
            if self.max_rent.is_some_and(|max| max < price) {
                return false;
            }
        }

        if self.min_beds.is_some_and(|min| min > listing.bedrooms) {
            return false;
        }
        if self.min_baths.is_some_and(|min| min > listing.bathrooms) {
            return false;
        }

        true
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
