// SPDX-License-Identifier: Apache-2.0

use rusqlite::Connection;
use sechub_core::CatalogError;
use tracing::info;

pub const SQLITE_SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS vendors (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  description TEXT NOT NULL DEFAULT '',
  icon TEXT NOT NULL DEFAULT '',
  website TEXT NOT NULL DEFAULT ''
);
CREATE UNIQUE INDEX IF NOT EXISTS uix_vendors_name ON vendors(name);

CREATE TABLE IF NOT EXISTS resources (
  id INTEGER PRIMARY KEY,
  resource_id TEXT NOT NULL,
  kind TEXT NOT NULL DEFAULT 'FalcoRule',
  vendor_id INTEGER REFERENCES vendors(id) ON UPDATE RESTRICT ON DELETE RESTRICT
);
CREATE UNIQUE INDEX IF NOT EXISTS uix_resources_resource_id ON resources(resource_id);
CREATE INDEX IF NOT EXISTS idx_resources_vendor_id ON resources(vendor_id);

CREATE TABLE IF NOT EXISTS resource_versions (
  id INTEGER PRIMARY KEY,
  resource_id INTEGER NOT NULL REFERENCES resources(id) ON UPDATE RESTRICT ON DELETE RESTRICT,
  name TEXT NOT NULL,
  short_description TEXT NOT NULL DEFAULT '',
  description TEXT NOT NULL DEFAULT '',
  keywords TEXT NOT NULL DEFAULT '',
  icon TEXT NOT NULL DEFAULT '',
  website TEXT NOT NULL DEFAULT '',
  version TEXT NOT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS uix_resource_versions_version ON resource_versions(resource_id, version);

CREATE TABLE IF NOT EXISTS maintainers (
  id INTEGER PRIMARY KEY,
  resource_version_id INTEGER NOT NULL REFERENCES resource_versions(id) ON UPDATE RESTRICT ON DELETE RESTRICT,
  name TEXT NOT NULL DEFAULT '',
  email TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_maintainers_resource_version_id ON maintainers(resource_version_id);

CREATE TABLE IF NOT EXISTS falco_rule_data (
  id INTEGER PRIMARY KEY,
  resource_version_id INTEGER NOT NULL REFERENCES resource_versions(id) ON UPDATE RESTRICT ON DELETE RESTRICT,
  raw TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_falco_rule_data_resource_version_id ON falco_rule_data(resource_version_id);
";

pub fn schema_version(conn: &Connection) -> Result<i64, CatalogError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| CatalogError::backend(e.to_string()))
}

/// Brings the schema up to [`SQLITE_SCHEMA_VERSION`]. Running it against an
/// up-to-date database writes nothing.
pub fn migrate(conn: &Connection) -> Result<(), CatalogError> {
    let current = schema_version(conn)?;
    if current > SQLITE_SCHEMA_VERSION {
        return Err(CatalogError::backend(format!(
            "database schema version {current} is newer than supported version {SQLITE_SCHEMA_VERSION}"
        )));
    }
    if current == SQLITE_SCHEMA_VERSION {
        return Ok(());
    }
    conn.execute_batch(SCHEMA)
        .map_err(|e| CatalogError::backend(e.to_string()))?;
    conn.execute_batch(&format!("PRAGMA user_version={SQLITE_SCHEMA_VERSION};"))
        .map_err(|e| CatalogError::backend(e.to_string()))?;
    info!(from = current, to = SQLITE_SCHEMA_VERSION, "catalog schema migrated");
    Ok(())
}
