use crate::AppState;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use tracing::info;

pub const ACCESS_LOG_TARGET: &str = "sechub_access";

/// `<status> [<remote-addr>] <method> <url>`
#[must_use]
pub fn access_log_line(status: u16, remote: &str, method: &str, url: &str) -> String {
    format!("{status} [{remote}] {method} {url}")
}

pub(crate) async fn request_log_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.api.request_log {
        return next.run(request).await;
    }
    let method = request.method().to_string();
    let url = request.uri().to_string();
    let path = request.uri().path().to_string();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());

    let response = next.run(request).await;
    let status = response.status().as_u16();
    info!(
        target: ACCESS_LOG_TARGET,
        status,
        remote = %remote,
        method = %method,
        path = %path,
        "{}",
        access_log_line(status, &remote, &method, &url)
    );
    response
}
