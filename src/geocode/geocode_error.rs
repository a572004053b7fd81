use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Geocoding service returned {status}: {message}")]
    Service { status: String, message: String },

    #[error("No geocoding results for \"{0}\"")]
    NoResults(String),

    #[error("Could not decode geocoding response: {0}")]
    Decode(String),
}
