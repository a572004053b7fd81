pub mod error;
pub mod filters;
pub mod listing;
pub mod results;

pub use error::{error_fragment, error_page};
pub use filters::search_bar;
pub use listing::{detail_placeholder, listing_detail, listing_preview};
pub use results::{results_list, update_listings_view};
