use sechub_core::{parse_bool, CatalogError};
use serde::Serialize;
use std::net::SocketAddr;

pub const ENV_HUB_BIND: &str = "HUB_BIND";
pub const ENV_HUB_BACKEND: &str = "HUB_BACKEND";
pub const ENV_HUB_LOG_JSON: &str = "HUB_LOG_JSON";
pub const ENV_HUB_NOT_FOUND_STATUS_404: &str = "HUB_NOT_FOUND_STATUS_404";
pub const ENV_HUB_REQUEST_LOG: &str = "HUB_REQUEST_LOG";

/// Which repository pair serves the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogBackend {
    Database,
    File,
}

impl CatalogBackend {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "db" | "database" | "sql" => Ok(Self::Database),
            "file" | "fs" => Ok(Self::File),
            other => Err(CatalogError::configuration(format!(
                "unsupported {ENV_HUB_BACKEND} value: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub backend: CatalogBackend,
    pub log_json: bool,
    /// Answer `NotFound`/`NoResources` with 404 instead of the historical 500.
    pub not_found_status_404: bool,
    pub request_log: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            backend: CatalogBackend::Database,
            log_json: true,
            not_found_status_404: false,
            request_log: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag =
            |name: &str, default: bool| parse_bool(lookup(name).as_deref()).unwrap_or(default);
        let backend = match lookup(ENV_HUB_BACKEND) {
            Some(raw) => CatalogBackend::parse(&raw)?,
            None => defaults.backend,
        };
        Ok(Self {
            bind_addr: lookup(ENV_HUB_BIND).unwrap_or(defaults.bind_addr),
            backend,
            log_json: flag(ENV_HUB_LOG_JSON, defaults.log_json),
            not_found_status_404: flag(ENV_HUB_NOT_FOUND_STATUS_404, defaults.not_found_status_404),
            request_log: flag(ENV_HUB_REQUEST_LOG, defaults.request_log),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, CatalogError> {
        self.bind_addr.parse().map_err(|e| {
            CatalogError::configuration(format!("invalid bind addr {}: {e}", self.bind_addr))
        })
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), CatalogError> {
    if api.bind_addr.trim().is_empty() {
        return Err(CatalogError::configuration("bind address must not be empty"));
    }
    api.socket_addr()?;
    Ok(())
}
