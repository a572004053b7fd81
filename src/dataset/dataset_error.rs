use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid dataset source: {0}")]
    InvalidSource(String),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch dataset: {0}")]
    Network(String),

    #[error("Failed to decode dataset: {0}")]
    Decode(#[from] serde_json::Error),
}
