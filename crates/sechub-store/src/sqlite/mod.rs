//! Relational catalog stored in SQLite.

mod resources;
mod schema;
mod vendors;

use rusqlite::Connection;
use sechub_core::CatalogError;
use std::path::Path;
use std::sync::Mutex;

pub use resources::SqliteResourceRepository;
pub use schema::{migrate, schema_version, SQLITE_SCHEMA_VERSION};
pub use vendors::SqliteVendorRepository;

/// Keywords are persisted as one comma-joined column.
#[must_use]
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(",")
}

#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|k| !k.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Shared handle to the catalog database. Every repository built on the same
/// handle serializes its statements through one connection.
#[derive(Debug)]
pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| {
            CatalogError::backend(format!("open {}: {e}", path.display()))
        })?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, CatalogError> {
        let conn = Connection::open_in_memory().map_err(|e| CatalogError::backend(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, CatalogError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| CatalogError::backend(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn migrate(&self) -> Result<(), CatalogError> {
        self.with_connection(|conn| migrate(conn))
    }

    pub fn schema_version(&self) -> Result<i64, CatalogError> {
        self.with_connection(|conn| schema_version(conn))
    }

    pub fn with_connection<T, F>(&self, f: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut Connection) -> Result<T, CatalogError>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| CatalogError::backend("sqlite connection lock poisoned"))?;
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_roundtrip_through_comma_column() {
        let keywords = vec!["web".to_string(), "server".to_string()];
        assert_eq!(join_keywords(&keywords), "web,server");
        assert_eq!(split_keywords("web,server"), keywords);
        assert!(split_keywords("").is_empty());
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let db = SqliteDatabase::open_in_memory().expect("open");
        db.migrate().expect("migrate");
        let err = db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO resources (resource_id, kind, vendor_id) VALUES ('x', 'FalcoRule', 42)",
                [],
            )
            .map_err(|e| CatalogError::backend(e.to_string()))
        });
        assert!(err.is_err());
    }
}
