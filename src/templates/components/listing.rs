use crate::domain::Listing;
use maud::{html, Markup, PreEscaped};

pub const DETAIL_PLACEHOLDER: &str = "Select a listing from the list on the left.";

const MAP_ZOOM: u8 = 16;

/// Card for the results list. Clicking it loads the detail panel.
pub fn listing_preview(listing: &Listing) -> Markup {
    html! {
        li
            class="listing-preview"
            hx-get={ "/listings/" (listing.id) }
            hx-target="#selected-result"
            hx-swap="outerHTML"
        {
            @if let Some(src) = listing.preview_photo() {
                img src=(src) alt=(listing.headline()) loading="lazy";
            }
            p class="headline" { (listing.headline()) }
            p class="summary" { (listing.summary()) }
        }
    }
}

/// Empty detail panel. `out_of_band` marks it for an htmx out-of-band swap so
/// it can ride along with a results-list response.
pub fn detail_placeholder(out_of_band: bool) -> Markup {
    html! {
        div id="selected-result" hx-swap-oob=[out_of_band.then_some("true")] {
            h2 { (DETAIL_PLACEHOLDER) }
        }
    }
}

/// Full detail panel for one listing.
pub fn listing_detail(listing: &Listing, map_id: &str) -> Markup {
    let gallery_id = format!("gallery-{}", listing.id);
    let center = format!("{}, {}", listing.latitude, listing.longitude);

    html! {
        div id="selected-result" {
            h1 { (listing.headline()) }
            h2 { "Listing ID: " (listing.id) }
            h2 { (listing.summary()) }
            p class="description" { (listing.description) }

            div id=(gallery_id) class="gallery" {
                @for src in listing.gallery() {
                    div { img src=(src) alt="Listing photo"; }
                }
            }

            gmp-map center=(center) zoom=(MAP_ZOOM) map-id=(map_id) title="Listing Area" {
                gmp-advanced-marker position=(center) title="Listing" {}
            }

            @for group in &listing.property_groups {
                h2 { (group.title) }
                ul {
                    @for value in &group.values {
                        li { (value) }
                    }
                }
            }

            h2 { "Nearby Schools" }
            ul class="schools" {
                @for school in &listing.schools {
                    li {
                        a href=(school.link) target="_blank" rel="noopener noreferrer" { (school.name) }
                        " " (school.description()) " is " (school.distance) " miles away"
                    }
                }
            }

            script {
                (PreEscaped(format!(
                    "if (window.tns) {{ tns({{ container: '#{gallery_id}', mode: 'gallery', nav: false, edgePadding: 20 }}); }}"
                )))
            }
        }
    }
}
