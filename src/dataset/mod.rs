mod dataset_error;
mod loader;

pub use dataset_error::DatasetError;
pub use loader::{DatasetLoader, DatasetSource};
