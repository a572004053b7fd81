pub mod filter;
pub mod geo;
pub mod listing;
pub mod mode;

pub use filter::FilterCriteria;
pub use geo::{Bounds, LatLng};
pub use listing::Listing;
pub use mode::ViewMode;
