// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sechub_core::CatalogError;
use sechub_model::HELM_RULES_CONTENT_TYPE;
use serde::Serialize;
use tracing::error;

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Runs a synchronous catalog call off the async workers.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T, CatalogError>
where
    F: FnOnce() -> Result<T, CatalogError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| CatalogError::backend(format!("catalog task failed: {e}")))?
}

pub(crate) fn error_status(state: &AppState, err: &CatalogError) -> StatusCode {
    if state.api.not_found_status_404 && err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub(crate) fn error_response(state: &AppState, err: &CatalogError) -> Response {
    (
        error_status(state, err),
        [(CONTENT_TYPE, TEXT_PLAIN)],
        err.to_string(),
    )
        .into_response()
}

/// JSON body terminated by a newline, the way a streaming encoder writes it.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(mut body) => {
            body.push(b'\n');
            (StatusCode::OK, [(CONTENT_TYPE, APPLICATION_JSON)], body).into_response()
        }
        Err(e) => {
            error!("json serialization failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, TEXT_PLAIN)],
                format!("json serialization failed: {e}"),
            )
                .into_response()
        }
    }
}

pub(crate) fn yaml_response(body: String) -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, HELM_RULES_CONTENT_TYPE)], body).into_response()
}

pub(crate) fn respond_json<T: Serialize>(
    state: &AppState,
    result: Result<T, CatalogError>,
) -> Response {
    match result {
        Ok(value) => json_response(&value),
        Err(err) => error_response(state, &err),
    }
}

pub(crate) fn respond_yaml(state: &AppState, result: Result<String, CatalogError>) -> Response {
    match result {
        Ok(body) => yaml_response(body),
        Err(err) => error_response(state, &err),
    }
}
