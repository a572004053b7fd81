// search.rs
use crate::domain::{FilterCriteria, Listing};
use crate::geocode::{GeocodeError, Geocoder};
use tracing::{debug, info};

/// Geocodes the location text (once, and only when present) and keeps the
/// listings that satisfy every criterion.
pub fn run_search<G>(
    listings: &[Listing],
    criteria: &FilterCriteria,
    geocoder: &G,
) -> Result<Vec<Listing>, GeocodeError>
where
    G: Geocoder + ?Sized,
{
    let places = match criteria.location_query() {
        Some(location) => {
            let places = geocoder.geocode(location)?;
            debug!(
                location,
                places = ?places.iter().map(|p| p.formatted_address()).collect::<Vec<_>>(),
                "Location geocoded"
            );
            places
        }
        None => Vec::new(),
    };

    let matched: Vec<Listing> = listings
        .iter()
        .filter(|listing| criteria.matches(listing, &places))
        .cloned()
        .collect();

    info!("Filtered out {} listings", listings.len() - matched.len());

    Ok(matched)
}
