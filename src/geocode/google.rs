// google.rs
use super::models::GoogleResponse;
use super::{GeocodeError, GeocodeResult, Geocoder};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Restricts lookups to one locality, e.g. "New York City" in "US".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRegion {
    pub locality: String,
    pub country: String,
}

impl GeocodeRegion {
    /// The `components` filter understood by the geocoding API.
    pub fn components(&self) -> String {
        format!("locality:{}|country:{}", self.locality, self.country)
    }
}

pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    region: GeocodeRegion,
}

impl GoogleGeocoder {
    pub fn new(api_key: String, region: GeocodeRegion) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            region,
        })
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let components = self.region.components();

        debug!(address, components = %components, "Querying geocoding service");

        let resp = self
            .client
            .get(GEOCODE_URL)
            .query(&[
                ("address", address),
                ("components", components.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(GeocodeError::Service {
                status: status.to_string(),
                message: text,
            });
        }

        let body: GoogleResponse = resp
            .json()
            .map_err(|e| GeocodeError::Decode(e.to_string()))?;

        interpret(address, body)
    }
}

/// Maps the API's status field onto results or an error.
pub(crate) fn interpret(
    address: &str,
    body: GoogleResponse,
) -> Result<Vec<GeocodeResult>, GeocodeError> {
    match body.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Err(GeocodeError::NoResults(address.to_string())),
        _ => {
            return Err(GeocodeError::Service {
                status: body.status,
                message: body.error_message.unwrap_or_default(),
            })
        }
    }

    if body.results.is_empty() {
        return Err(GeocodeError::NoResults(address.to_string()));
    }

    if body.results.len() > 2 {
        warn!(
            address,
            count = body.results.len(),
            "Geocoding returned more than two results"
        );
    }

    Ok(body.results.into_iter().map(GeocodeResult::from).collect())
}
