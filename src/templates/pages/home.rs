// templates/pages/home.rs

use crate::domain::{Listing, ViewMode};
use crate::state::PageSettings;
use crate::templates::{
    components::{detail_placeholder, results_list, search_bar},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(page: &PageSettings, mode: &ViewMode, listings: Vec<Listing>) -> Markup {
    desktop_layout(
        "Apartment Listings",
        page,
        mode,
        html! {
            (search_bar())
            main {
                (results_list(mode, listings))
                (detail_placeholder(false))
            }
        },
    )
}
