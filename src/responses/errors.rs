use crate::errors::ServerError;
use crate::templates::components::{error_fragment, error_page};
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML response. htmx requests get a fragment
/// they can show inline; everything else gets a full page.
pub fn error_to_response(err: &ServerError, fragment: bool) -> Response {
    let status = err.status();
    let message = err.to_string();

    let markup = if fragment {
        error_fragment(status, &message)
    } else {
        error_page(status, &message)
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
