use crate::domain::FilterCriteria;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{error_to_response, html_response};
use crate::search::run_search;
use crate::state::AppState;
use crate::templates;
use astra::{Request, Response};
use tracing::{error, warn};

/// Routes a request and renders any error as HTML.
pub fn respond(req: Request, state: &AppState) -> Response {
    let fragment = is_htmx(&req);
    let path = req.uri().path().to_string();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::NotFound | ServerError::BadRequest(_) => {
                    warn!(path = %path, "{err}")
                }
                _ => error!(path = %path, "{err}"),
            }
            error_to_response(&err, fragment)
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(state),
        ("GET", "/search") => search(&req, state),
        ("GET", p) if p.starts_with("/listings/") => {
            let id = p.trim_start_matches("/listings/");
            listing(id, state)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let listings = state.dataset.load()?;
    html_response(templates::pages::home_page(
        &state.page,
        state.mode(),
        listings.to_vec(),
    ))
}

fn search(req: &Request, state: &AppState) -> ResultResp {
    let criteria = FilterCriteria::from_pairs(parse_query(req));
    let listings = state.dataset.load()?;

    let matched = run_search(&listings, &criteria, &*state.geocoder)?;

    html_response(templates::update_listings_view(state.mode(), matched))
}

fn listing(raw_id: &str, state: &AppState) -> ResultResp {
    let id: u64 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid listing id: {raw_id}")))?;

    let listing = state.dataset.find(id)?.ok_or(ServerError::NotFound)?;

    html_response(templates::listing_detail(&listing, &state.page.map_id))
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .is_some_and(|v| v.as_bytes() == b"true")
}
