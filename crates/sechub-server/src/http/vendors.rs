use crate::http::responses::{respond_json, run_blocking};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;

pub(crate) async fn all_vendors_handler(State(state): State<AppState>) -> Response {
    let use_case = state.factory.retrieve_all_vendors();
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn one_vendor_handler(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Response {
    let use_case = state.factory.retrieve_one_vendor(&vendor_id);
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn vendor_resources_handler(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Response {
    let use_case = state.factory.retrieve_all_resources_from_vendor(&vendor_id);
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}
