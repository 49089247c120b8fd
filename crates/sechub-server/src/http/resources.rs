use crate::http::responses::{respond_json, respond_yaml, run_blocking};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;

pub(crate) async fn all_latest_handler(State(state): State<AppState>) -> Response {
    let use_case = state.factory.retrieve_all_resources_latest_versions();
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn one_resource_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Response {
    let use_case = state.factory.retrieve_one_resource(&resource_id);
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn all_versions_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Response {
    let use_case = state.factory.retrieve_all_resource_versions(&resource_id);
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn one_version_handler(
    State(state): State<AppState>,
    Path((resource_id, version)): Path<(String, String)>,
) -> Response {
    let use_case = state
        .factory
        .retrieve_one_resource_version(&resource_id, &version);
    let result = run_blocking(move || use_case.execute()).await;
    respond_json(&state, result)
}

pub(crate) async fn helm_rules_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Response {
    let use_case = state
        .factory
        .retrieve_falco_rules_for_helm_chart(&resource_id);
    let result = run_blocking(move || use_case.execute()).await;
    respond_yaml(&state, result)
}

pub(crate) async fn helm_rules_version_handler(
    State(state): State<AppState>,
    Path((resource_id, version)): Path<(String, String)>,
) -> Response {
    let use_case = state
        .factory
        .retrieve_falco_rules_for_helm_chart_version(&resource_id, &version);
    let result = run_blocking(move || use_case.execute()).await;
    respond_yaml(&state, result)
}
