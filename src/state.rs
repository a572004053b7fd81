// state.rs
use crate::dataset::DatasetLoader;
use crate::domain::ViewMode;
use crate::geocode::Geocoder;

/// Page settings the templates need from the config.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub maps_api_key: String,
    pub map_id: String,
}

/// Everything a request handler may touch. Built once after the mode gate
/// and the first dataset load, then shared read-only by the workers.
pub struct AppState {
    pub dataset: DatasetLoader,
    pub geocoder: Box<dyn Geocoder>,
    pub page: PageSettings,
}

impl AppState {
    pub fn new(dataset: DatasetLoader, geocoder: Box<dyn Geocoder>, page: PageSettings) -> Self {
        Self {
            dataset,
            geocoder,
            page,
        }
    }

    pub fn mode(&self) -> &ViewMode {
        self.dataset.mode()
    }
}
