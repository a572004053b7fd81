use super::DatasetError;
use crate::domain::{Listing, ViewMode};
use reqwest::blocking::Client;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::info;
use url::Url;

/// Where the listing JSON lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(Url),
}

impl DatasetSource {
    /// `http://` and `https://` values are URLs, anything else is a path.
    pub fn parse(raw: &str) -> Result<Self, DatasetError> {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            let url = Url::parse(raw).map_err(|e| DatasetError::InvalidSource(e.to_string()))?;
            Ok(DatasetSource::Url(url))
        } else if raw.is_empty() {
            Err(DatasetError::InvalidSource("empty path".into()))
        } else {
            Ok(DatasetSource::File(PathBuf::from(raw)))
        }
    }

    fn fetch(&self) -> Result<Vec<Listing>, DatasetError> {
        match self {
            DatasetSource::File(path) => {
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            DatasetSource::Url(url) => {
                let client = Client::builder()
                    .timeout(Duration::from_secs(60))
                    .build()
                    .map_err(|e| DatasetError::Network(e.to_string()))?;

                let text = client
                    .get(url.clone())
                    .send()
                    .and_then(|resp| resp.error_for_status())
                    .and_then(|resp| resp.text())
                    .map_err(|e| DatasetError::Network(e.to_string()))?;

                Ok(serde_json::from_str(&text)?)
            }
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Loads the listing collection once and hands out the cached copy after.
///
/// In client mode the first load also drops listings outside the id set and
/// clears every remaining price. Later calls never re-fetch.
pub struct DatasetLoader {
    source: DatasetSource,
    mode: ViewMode,
    cached: Mutex<Option<Arc<Vec<Listing>>>>,
}

impl DatasetLoader {
    pub fn new(source: DatasetSource, mode: ViewMode) -> Self {
        Self {
            source,
            mode,
            cached: Mutex::new(None),
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn load(&self) -> Result<Arc<Vec<Listing>>, DatasetError> {
        // Held across the fetch so concurrent first callers wait for one load.
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(listings) = cached.as_ref() {
            return Ok(Arc::clone(listings));
        }

        let raw = self.source.fetch()?;
        let total = raw.len();
        info!(count = total, source = %self.source, "Dataset loaded");

        let listings = self.mode.redact(raw);
        if let ViewMode::Client(ids) = &self.mode {
            info!(
                requested = ids.len(),
                kept = listings.len(),
                dropped = total - listings.len(),
                "Client redaction applied"
            );
        }

        let listings = Arc::new(listings);
        *cached = Some(Arc::clone(&listings));
        Ok(listings)
    }

    /// A visible listing by id.
    pub fn find(&self, id: u64) -> Result<Option<Listing>, DatasetError> {
        Ok(self.load()?.iter().find(|l| l.id == id).cloned())
    }
}
