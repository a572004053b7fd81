use crate::domain::filter::{BATHS_FIELD, BEDS_FIELD, LOCATION_FIELD, RENT_MAX_FIELD, RENT_MIN_FIELD};
use maud::{html, Markup};

/// The five search fields. Any change re-runs the search after a short pause.
pub fn search_bar() -> Markup {
    html! {
        form
            id="search-bar"
            hx-get="/search"
            hx-target="#results-list"
            hx-swap="outerHTML"
            hx-trigger="input changed delay:400ms, submit"
        {
            label for=(LOCATION_FIELD) { "Location" }
            input type="text" id=(LOCATION_FIELD) name=(LOCATION_FIELD) placeholder="Neighborhood, street or zip";

            label for=(RENT_MIN_FIELD) { "Min rent" }
            input type="number" id=(RENT_MIN_FIELD) name=(RENT_MIN_FIELD) min="0" step="50";

            label for=(RENT_MAX_FIELD) { "Max rent" }
            input type="number" id=(RENT_MAX_FIELD) name=(RENT_MAX_FIELD) min="0" step="50";

            label for=(BEDS_FIELD) { "Beds" }
            input type="number" id=(BEDS_FIELD) name=(BEDS_FIELD) min="0";

            label for=(BATHS_FIELD) { "Baths" }
            input type="number" id=(BATHS_FIELD) name=(BATHS_FIELD) min="0";

            button type="submit" class="primary" { "Search" }
        }
        div id="search-error" {}
    }
}
