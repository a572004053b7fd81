use crate::domain::{Listing, ViewMode};
use crate::templates::components::{detail_placeholder, listing_preview};
use maud::{html, Markup};

/// The results list in display order for `mode`.
pub fn results_list(mode: &ViewMode, mut listings: Vec<Listing>) -> Markup {
    mode.sort(&mut listings);

    html! {
        ul id="results-list" {
            @for listing in &listings {
                (listing_preview(listing))
            }
            @if listings.is_empty() {
                li class="empty" { "No listings match these filters." }
            }
        }
    }
}

/// Response to a search: a fresh results list plus a reset detail panel.
pub fn update_listings_view(mode: &ViewMode, listings: Vec<Listing>) -> Markup {
    html! {
        (results_list(mode, listings))
        (detail_placeholder(true))
    }
}
