// errors.rs
use crate::dataset::DatasetError;
use crate::geocode::GeocodeError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (dataset, geocoder).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Dataset Error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Search failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Geocode(_) => 502,
            ServerError::Dataset(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
