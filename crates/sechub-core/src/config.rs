use crate::CatalogError;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASS: &str = "DB_PASS";
pub const ENV_RESOURCES_PATH: &str = "RESOURCES_PATH";
pub const ENV_VENDOR_PATH: &str = "VENDOR_PATH";

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required<F>(lookup: &F, name: &str) -> Result<String, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| CatalogError::configuration(format!("The {name} env var is not set")))
}

#[must_use]
pub fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

/// Connection settings for the relational catalog.
///
/// The catalog database is SQLite: `name` is the database file path. Host, port
/// and user are carried for operator-facing logs only.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = required(&lookup, ENV_DB_HOST)?;
        let port_raw = required(&lookup, ENV_DB_PORT)?;
        let name = required(&lookup, ENV_DB_NAME)?;
        let user = required(&lookup, ENV_DB_USER)?;
        let password = required(&lookup, ENV_DB_PASS)?;
        let port = port_raw.trim().parse::<u16>().map_err(|_| {
            CatalogError::configuration(format!("The {ENV_DB_PORT} env var is not a valid port: {port_raw}"))
        })?;
        if name.trim().is_empty() {
            return Err(CatalogError::configuration(format!(
                "The {ENV_DB_NAME} env var must not be empty"
            )));
        }
        Ok(Self {
            host,
            port,
            name,
            user,
            password,
        })
    }

    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(self.name.trim())
    }
}

impl Debug for DatabaseConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalogConfig {
    pub resources_path: PathBuf,
    pub vendor_path: PathBuf,
}

impl FileCatalogConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            resources_path: PathBuf::from(required(&lookup, ENV_RESOURCES_PATH)?),
            vendor_path: PathBuf::from(required(&lookup, ENV_VENDOR_PATH)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool(Some("YES")), Some(true));
        assert_eq!(parse_bool(Some("0")), Some(false));
        assert_eq!(parse_bool(Some("maybe")), None);
        assert_eq!(parse_bool(None), None);
    }

    #[test]
    fn database_config_reports_first_missing_variable() {
        let err = DatabaseConfig::from_lookup(lookup_from(&[
            (ENV_DB_HOST, "localhost"),
            (ENV_DB_PORT, "5432"),
        ]))
        .expect_err("missing name");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "The DB_NAME env var is not set");
    }

    #[test]
    fn database_config_rejects_non_numeric_port() {
        let err = DatabaseConfig::from_lookup(lookup_from(&[
            (ENV_DB_HOST, "localhost"),
            (ENV_DB_PORT, "pg"),
            (ENV_DB_NAME, "/tmp/hub.sqlite"),
            (ENV_DB_USER, "hub"),
            (ENV_DB_PASS, "secret"),
        ]))
        .expect_err("bad port");
        assert!(err.message.contains("DB_PORT"));
    }

    #[test]
    fn database_config_debug_redacts_password() {
        let cfg = DatabaseConfig::from_lookup(lookup_from(&[
            (ENV_DB_HOST, "localhost"),
            (ENV_DB_PORT, "5432"),
            (ENV_DB_NAME, "/tmp/hub.sqlite"),
            (ENV_DB_USER, "hub"),
            (ENV_DB_PASS, "hunter2"),
        ]))
        .expect("config");
        assert_eq!(cfg.database_path(), PathBuf::from("/tmp/hub.sqlite"));
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn file_catalog_config_requires_both_paths() {
        let err = FileCatalogConfig::from_lookup(lookup_from(&[(ENV_RESOURCES_PATH, "/r")]))
            .expect_err("vendor path missing");
        assert_eq!(err.to_string(), "The VENDOR_PATH env var is not set");

        let cfg = FileCatalogConfig::from_lookup(lookup_from(&[
            (ENV_RESOURCES_PATH, "/r"),
            (ENV_VENDOR_PATH, "/v"),
        ]))
        .expect("config");
        assert_eq!(cfg.vendor_path, PathBuf::from("/v"));
    }
}
