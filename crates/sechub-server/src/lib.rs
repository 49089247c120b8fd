#![forbid(unsafe_code)]
//! HTTP surface of the security hub catalog.

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use sechub_query::UseCaseFactory;

mod config;
mod http;
mod middleware;
mod telemetry;

pub use config::{
    validate_startup_config, ApiConfig, CatalogBackend, ENV_HUB_BACKEND, ENV_HUB_BIND,
    ENV_HUB_LOG_JSON, ENV_HUB_NOT_FOUND_STATUS_404, ENV_HUB_REQUEST_LOG,
};
pub use middleware::{access_log_line, ACCESS_LOG_TARGET};
pub use telemetry::{init_tracing, log_subscriber};

pub const CRATE_NAME: &str = "sechub-server";

#[derive(Clone)]
pub struct AppState {
    pub factory: UseCaseFactory,
    pub api: ApiConfig,
}

impl AppState {
    #[must_use]
    pub fn new(factory: UseCaseFactory, api: ApiConfig) -> Self {
        Self { factory, api }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::health_handler))
        .route("/resources", get(http::resources::all_latest_handler))
        .route("/resources/:id", get(http::resources::one_resource_handler))
        .route(
            "/resources/:id/custom-rules.yaml",
            get(http::resources::helm_rules_handler),
        )
        .route(
            "/resources/:id/versions",
            get(http::resources::all_versions_handler),
        )
        .route(
            "/resources/:id/versions/:version",
            get(http::resources::one_version_handler),
        )
        .route(
            "/resources/:id/versions/:version/custom-rules.yaml",
            get(http::resources::helm_rules_version_handler),
        )
        .route("/vendors", get(http::vendors::all_vendors_handler))
        .route("/vendors/:vendor", get(http::vendors::one_vendor_handler))
        .route(
            "/vendors/:vendor/resources",
            get(http::vendors::vendor_resources_handler),
        )
        .fallback(http::not_found_handler)
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_log_middleware,
        ))
        .with_state(state)
}
