use crate::domain::ViewMode;
use crate::state::PageSettings;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const TNS_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/tiny-slider/2.9.4/tiny-slider.css";
const TNS_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/tiny-slider/2.9.2/min/tiny-slider.js";

// Failed searches land in #search-error instead of being dropped by htmx.
const SEARCH_ERROR_SCRIPT: &str = r#"
document.addEventListener('htmx:responseError', function (e) {
  document.getElementById('search-error').innerHTML = e.detail.xhr.responseText;
});
document.addEventListener('htmx:afterRequest', function (e) {
  if (e.detail.successful) document.getElementById('search-error').innerHTML = '';
});
"#;

pub fn desktop_layout(title: &str, page: &PageSettings, mode: &ViewMode, content: Markup) -> Markup {
    let maps_src = format!(
        "https://maps.googleapis.com/maps/api/js?key={}&libraries=maps,marker&v=beta",
        page.maps_api_key
    );

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(TNS_CSS);
                style {
                    "body { font-family: system-ui, sans-serif; margin: 0; }"
                    "header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15); }"
                    "main { display: grid; grid-template-columns: 24rem 1fr; gap: 1rem; padding: 1rem; }"
                    "#results-list { list-style: none; padding: 0; overflow-y: auto; max-height: 80vh; }"
                    ".listing-preview { cursor: pointer; border-bottom: 1px solid #ddd; padding: 0.5rem 0; }"
                    ".listing-preview img { width: 100%; }"
                    "gmp-map { height: 320px; display: block; }"
                    ".error { color: #a00; }"
                }
                script src=(HTMX_SRC) defer {}
                script src=(TNS_SRC) defer {}
                script src=(maps_src) async {}
            }
            body {
                header {
                    h3 { "Apartment Listings" }
                    span class="mode-badge" {
                        @match mode {
                            ViewMode::Agent => "Agent view",
                            ViewMode::Client(_) => "Client view",
                        }
                    }
                }
                (content)
                script { (PreEscaped(SEARCH_ERROR_SCRIPT)) }
            }
        }
    }
}
