#![forbid(unsafe_code)]
//! Shared error kinds, exit codes and environment configuration for the security hub crates.

pub mod config;
mod error;

pub use config::{
    parse_bool, DatabaseConfig, FileCatalogConfig, ENV_DB_HOST, ENV_DB_NAME,
    ENV_DB_PASS, ENV_DB_PORT, ENV_DB_USER, ENV_RESOURCES_PATH, ENV_VENDOR_PATH,
};
pub use error::{CatalogError, ErrorKind, ExitCode, MachineError};

pub const CRATE_NAME: &str = "sechub-core";
