// SPDX-License-Identifier: Apache-2.0

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOWED_METHODS: &str = "GET,HEAD,OPTIONS";
const DEFAULT_ALLOWED_HEADERS: &str = "accept,content-type,origin,x-requested-with";

/// Any origin may read the catalog. Preflight requests are answered here and
/// never reach a handler.
pub(crate) async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let has_origin = req.headers().contains_key("origin");
    if req.method() == Method::OPTIONS {
        let requested_headers = req
            .headers()
            .get("access-control-request-headers")
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert("access-control-allow-headers", requested_headers);
        headers.insert("vary", HeaderValue::from_static("Origin"));
        return resp;
    }

    let mut resp = next.run(req).await;
    if has_origin {
        resp.headers_mut()
            .insert("access-control-allow-origin", HeaderValue::from_static("*"));
    }
    resp.headers_mut()
        .insert("vary", HeaderValue::from_static("Origin"));
    resp
}
