pub(crate) mod resources;
pub(crate) mod responses;
pub(crate) mod vendors;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub(crate) async fn health_handler() -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, "text/plain")], "OK").into_response()
}

pub(crate) async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, responses::TEXT_PLAIN)],
        "404 page not found\n",
    )
        .into_response()
}
