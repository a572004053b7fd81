use crate::domain::geo::NEAR_EPSILON;
use crate::domain::{Bounds, LatLng};
use serde::Deserialize;

/// One candidate place for an address query.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResult {
    /// An area such as a neighbourhood or a zip code.
    Approximate {
        formatted_address: String,
        bounds: Bounds,
    },
    /// A specific point such as a building.
    Exact {
        formatted_address: String,
        location: LatLng,
    },
}

impl GeocodeResult {
    /// Area results contain points inside their bounds; point results
    /// contain points within [`NEAR_EPSILON`] on both axes.
    pub fn contains(&self, point: &LatLng) -> bool {
        match self {
            GeocodeResult::Approximate { bounds, .. } => bounds.contains(point),
            GeocodeResult::Exact { location, .. } => location.is_near(point, NEAR_EPSILON),
        }
    }

    pub fn formatted_address(&self) -> &str {
        match self {
            GeocodeResult::Approximate {
                formatted_address, ..
            }
            | GeocodeResult::Exact {
                formatted_address, ..
            } => formatted_address,
        }
    }
}

// response
//  ├── status
//  ├── error_message
//  └── results[]
//       ├── formatted_address
//       └── geometry
//            ├── location { lat, lng }
//            ├── location_type
//            ├── bounds { northeast, southwest }
//            └── viewport { northeast, southwest }

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GoogleResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleResult {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
    pub location_type: String,
    pub bounds: Option<Bounds>,
    pub viewport: Option<Bounds>,
}

impl From<GoogleResult> for GeocodeResult {
    fn from(result: GoogleResult) -> Self {
        let geometry = result.geometry;
        let area = geometry.bounds.or(geometry.viewport);

        match (geometry.location_type.as_str(), area) {
            ("APPROXIMATE", Some(bounds)) => GeocodeResult::Approximate {
                formatted_address: result.formatted_address,
                bounds,
            },
            _ => GeocodeResult::Exact {
                formatted_address: result.formatted_address,
                location: geometry.location,
            },
        }
    }
}
